//! Statement AST nodes
//! 
//! A `Statement` is one of five kinds. Each kind holds exactly the operands
//! it needs, so every value reachable through the constructors is valid and
//! stays valid: there is no way to mutate a statement after it is built.

use super::errors::{Invariant, InvariantViolation};
use super::expressions::Expr;
use std::fmt;
use std::ops::RangeInclusive;

/// The closed set of statement kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    ExpressionStatement,
    If,
    Return,
    Assignment,
    While,
}

impl StatementKind {
    /// Interchange-tree name of the primary operand for this kind.
    pub fn primary_role(self) -> &'static str {
        match self {
            StatementKind::ExpressionStatement => "expr",
            StatementKind::If | StatementKind::While => "cond",
            StatementKind::Return => "val",
            StatementKind::Assignment => "dst",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatementKind::ExpressionStatement => "ExpressionStatement",
            StatementKind::If => "If",
            StatementKind::Return => "Return",
            StatementKind::Assignment => "Assignment",
            StatementKind::While => "While",
        };
        write!(f, "{}", name)
    }
}

/// AST Statement node
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    node: Node,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Expression(Expr),
    If {
        condition: Expr,
        then_branch: Vec<Statement>,
        else_branch: Vec<Statement>,
    },
    Return(Option<Expr>),
    Assignment {
        dst: Expr,
        src: Expr,
    },
    While {
        condition: Expr,
        body: Vec<Statement>,
    },
}

/// Borrowed view of a statement for exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatementRef<'a> {
    Expression(&'a Expr),
    If {
        condition: &'a Expr,
        then_branch: &'a [Statement],
        else_branch: &'a [Statement],
    },
    Return(Option<&'a Expr>),
    Assignment {
        dst: &'a Expr,
        src: &'a Expr,
    },
    While {
        condition: &'a Expr,
        body: &'a [Statement],
    },
}

impl Statement {
    pub fn expression(expr: Expr) -> Self {
        Self {
            node: Node::Expression(expr),
        }
    }

    /// `if` without an else branch; the else branch is empty.
    pub fn if_then(condition: Expr, then_branch: Vec<Statement>) -> Self {
        Self::if_else(condition, then_branch, Vec::new())
    }

    pub fn if_else(
        condition: Expr,
        then_branch: Vec<Statement>,
        else_branch: Vec<Statement>,
    ) -> Self {
        Self {
            node: Node::If {
                condition,
                then_branch,
                else_branch,
            },
        }
    }

    pub fn return_void() -> Self {
        Self {
            node: Node::Return(None),
        }
    }

    pub fn return_value(value: Expr) -> Self {
        Self {
            node: Node::Return(Some(value)),
        }
    }

    pub fn assignment(dst: Expr, src: Expr) -> Self {
        Self {
            node: Node::Assignment { dst, src },
        }
    }

    pub fn while_loop(condition: Expr, body: Vec<Statement>) -> Self {
        Self {
            node: Node::While { condition, body },
        }
    }

    /// Build a statement from positional slots.
    ///
    /// `primary` is the expression, condition, return value or destination;
    /// `secondary` is the assignment source; `nested_blocks` holds the then
    /// and else branches of an `If` or the body of a `While`. Any combination
    /// the kind does not allow is rejected here.
    pub fn from_parts(
        kind: StatementKind,
        primary: Option<Expr>,
        secondary: Option<Expr>,
        nested_blocks: Vec<Vec<Statement>>,
    ) -> Result<Self, InvariantViolation> {
        let violation = |invariant| InvariantViolation::new(kind, invariant);

        if kind != StatementKind::Assignment && secondary.is_some() {
            return Err(violation(Invariant::UnexpectedOperand { role: "src" }));
        }

        let found = nested_blocks.len();
        let allowed: RangeInclusive<usize> = match kind {
            StatementKind::If => 1..=2,
            StatementKind::While => 1..=1,
            _ => 0..=0,
        };
        if !allowed.contains(&found) {
            let expected = match kind {
                StatementKind::If => "1 or 2",
                StatementKind::While => "exactly 1",
                _ => "no",
            };
            return Err(violation(Invariant::NestedBlockCount { expected, found }));
        }

        let missing = |role: &'static str| violation(Invariant::MissingOperand { role });
        let mut blocks = nested_blocks.into_iter();

        let statement = match kind {
            StatementKind::Return => match primary {
                Some(value) => Self::return_value(value),
                None => Self::return_void(),
            },
            StatementKind::ExpressionStatement => {
                Self::expression(primary.ok_or_else(|| missing(kind.primary_role()))?)
            }
            StatementKind::If => {
                let condition = primary.ok_or_else(|| missing(kind.primary_role()))?;
                let then_branch = blocks.next().unwrap_or_default();
                let else_branch = blocks.next().unwrap_or_default();
                Self::if_else(condition, then_branch, else_branch)
            }
            StatementKind::Assignment => {
                let dst = primary.ok_or_else(|| missing(kind.primary_role()))?;
                let src = secondary.ok_or_else(|| missing("src"))?;
                Self::assignment(dst, src)
            }
            StatementKind::While => {
                let condition = primary.ok_or_else(|| missing(kind.primary_role()))?;
                Self::while_loop(condition, blocks.next().unwrap_or_default())
            }
        };

        Ok(statement)
    }

    pub fn kind(&self) -> StatementKind {
        match self.node {
            Node::Expression(_) => StatementKind::ExpressionStatement,
            Node::If { .. } => StatementKind::If,
            Node::Return(_) => StatementKind::Return,
            Node::Assignment { .. } => StatementKind::Assignment,
            Node::While { .. } => StatementKind::While,
        }
    }

    pub fn view(&self) -> StatementRef<'_> {
        match &self.node {
            Node::Expression(expr) => StatementRef::Expression(expr),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => StatementRef::If {
                condition,
                then_branch,
                else_branch,
            },
            Node::Return(value) => StatementRef::Return(value.as_ref()),
            Node::Assignment { dst, src } => StatementRef::Assignment { dst, src },
            Node::While { condition, body } => StatementRef::While { condition, body },
        }
    }

    /// Expression, condition, return value or destination, depending on kind.
    pub fn primary_operand(&self) -> Option<&Expr> {
        match &self.node {
            Node::Expression(expr) => Some(expr),
            Node::If { condition, .. } | Node::While { condition, .. } => Some(condition),
            Node::Return(value) => value.as_ref(),
            Node::Assignment { dst, .. } => Some(dst),
        }
    }

    /// The source of an assignment.
    pub fn secondary_operand(&self) -> Option<&Expr> {
        match &self.node {
            Node::Assignment { src, .. } => Some(src),
            _ => None,
        }
    }

    /// Nested statement lists in positional order: `[then, else]` for `If`
    /// (the else list may be empty), `[body]` for `While`, none otherwise.
    pub fn nested_blocks(&self) -> Vec<&[Statement]> {
        match &self.node {
            Node::If {
                then_branch,
                else_branch,
                ..
            } => vec![then_branch.as_slice(), else_branch.as_slice()],
            Node::While { body, .. } => vec![body.as_slice()],
            _ => Vec::new(),
        }
    }

    pub fn expression_operand(&self) -> Option<&Expr> {
        match &self.node {
            Node::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn condition(&self) -> Option<&Expr> {
        match &self.node {
            Node::If { condition, .. } | Node::While { condition, .. } => Some(condition),
            _ => None,
        }
    }

    pub fn then_branch(&self) -> Option<&[Statement]> {
        match &self.node {
            Node::If { then_branch, .. } => Some(then_branch.as_slice()),
            _ => None,
        }
    }

    pub fn else_branch(&self) -> Option<&[Statement]> {
        match &self.node {
            Node::If { else_branch, .. } => Some(else_branch.as_slice()),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&[Statement]> {
        match &self.node {
            Node::While { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    /// The returned value; `None` for a bare return and for other kinds.
    pub fn return_operand(&self) -> Option<&Expr> {
        match &self.node {
            Node::Return(value) => value.as_ref(),
            _ => None,
        }
    }

    pub fn destination(&self) -> Option<&Expr> {
        match &self.node {
            Node::Assignment { dst, .. } => Some(dst),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<&Expr> {
        self.secondary_operand()
    }
}
