use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::expression::Expression;
use crate::number::Number;
use crate::operator::Operator;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;

/// Solutions keyed by their rendered form, which is also their sort order
pub type SolutionSet = BTreeMap<String, Expression>;

/// One way to reduce a search state: `state[left] op state[right]`
#[derive(Debug, Clone, Copy)]
pub(super) struct Branch {
    pub(super) left: usize,
    pub(super) right: usize,
    pub(super) op: Operator,
}

/// Exhaustive solver combining every digit exactly once to reach a target
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find every distinct expression over `digits` that evaluates to `target`.
    ///
    /// The result is sorted and free of duplicates. An unreachable target or an
    /// empty operator set gives an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptySearchState`] if `digits` is empty.
    pub fn solve(&self, digits: &[u32], target: i64) -> Result<Vec<String>, SolverError> {
        Ok(self.solve_expressions(digits, target)?.into_keys().collect())
    }

    /// Like [`Solver::solve`], keeping one expression tree per rendered solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptySearchState`] if `digits` is empty.
    pub fn solve_expressions(
        &self,
        digits: &[u32],
        target: i64,
    ) -> Result<SolutionSet, SolverError> {
        let symbols: String = self.config.operators.iter().map(|op| op.symbol()).collect();
        info!(
            "Searching for {} using digits {:?} and operators '{}'",
            target, digits, symbols
        );

        let state: Vec<Arc<Expression>> = digits
            .iter()
            .map(|&digit| Arc::new(Expression::leaf(digit)))
            .collect();
        let target = Number::from_integer(target);

        let found = if self.config.parallel && state.len() >= 2 {
            self.reduce_parallel(&state, &target)?
        } else {
            let mut found = SolutionSet::new();
            self.reduce(&state, &target, &mut found)?;
            found
        };

        info!("Found {} distinct solutions", found.len());
        Ok(found)
    }

    /// Every pair of positions with every operator, plus the swapped
    /// orientation for operators that are not commutative
    fn branches(&self, len: usize) -> Vec<Branch> {
        let mut branches = Vec::new();
        for first in 0..len {
            for second in first + 1..len {
                for &op in &self.config.operators {
                    branches.push(Branch {
                        left: first,
                        right: second,
                        op,
                    });
                    if !op.is_commutative() {
                        branches.push(Branch {
                            left: second,
                            right: first,
                            op,
                        });
                    }
                }
            }
        }
        branches
    }

    fn reduce(
        &self,
        state: &[Arc<Expression>],
        target: &Number,
        found: &mut SolutionSet,
    ) -> Result<(), SolverError> {
        match state {
            [] => Err(SolverError::EmptySearchState),
            [only] => {
                if only.value() == target {
                    let rendered = only.to_string();
                    trace!("Found solution: {}", rendered);
                    found
                        .entry(rendered)
                        .or_insert_with(|| (**only).clone());
                }
                Ok(())
            }
            _ => {
                for branch in self.branches(state.len()) {
                    self.explore(state, branch, target, found)?;
                }
                Ok(())
            }
        }
    }

    /// Apply one branch to `state` and keep reducing the shorter state it yields
    pub(super) fn explore(
        &self,
        state: &[Arc<Expression>],
        branch: Branch,
        target: &Number,
        found: &mut SolutionSet,
    ) -> Result<(), SolverError> {
        let operand = |position: usize| {
            state.get(position).ok_or(SolverError::PositionOutOfRange {
                position,
                len: state.len(),
            })
        };
        let (left, right) = (operand(branch.left)?, operand(branch.right)?);

        let Some(combined) = Expression::try_combine(branch.op, left, right) else {
            return Ok(());
        };

        // The new node replaces the left operand, the right operand is dropped
        let mut combined = Some(Arc::new(combined));
        let next: Vec<Arc<Expression>> = state
            .iter()
            .enumerate()
            .filter_map(|(position, expr)| {
                if position == branch.left {
                    combined.take()
                } else if position == branch.right {
                    None
                } else {
                    Some(Arc::clone(expr))
                }
            })
            .collect();

        self.reduce(&next, target, found)
    }

    fn reduce_parallel(
        &self,
        state: &[Arc<Expression>],
        target: &Number,
    ) -> Result<SolutionSet, SolverError> {
        let branches = self.branches(state.len());
        debug!("Distributing {} top-level branches", branches.len());

        branches
            .into_par_iter()
            .map(|branch| -> Result<SolutionSet, SolverError> {
                let mut found = SolutionSet::new();
                self.explore(state, branch, target, &mut found)?;
                Ok(found)
            })
            .try_reduce(SolutionSet::new, |mut merged, partial| {
                for (rendered, expr) in partial {
                    merged.entry(rendered).or_insert(expr);
                }
                Ok(merged)
            })
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
