//! The operator vocabulary: how each command mutates the accumulator.

use crate::error::{CanticleError, Result};
use crate::passage::VerseSet;
use crate::query::executor::QueryExecutor;
use crate::query::token::CommandKind;

impl CommandKind {
    /// Apply this operator to the accumulator, pulling any operand it
    /// needs from the executor's cursor.
    ///
    /// Commands see the cursor only through the executor handle passed
    /// in, so operand consumption is explicit: each call advances the
    /// shared replay exactly as far as its operand reaches.
    pub(crate) fn mutate(
        self,
        executor: &mut QueryExecutor<'_>,
        accumulator: &mut VerseSet,
    ) -> Result<()> {
        match self {
            CommandKind::Add => {
                let operand = executor.next_operand(self)?;
                accumulator.union_with(&operand);
            }
            CommandKind::Remove => {
                let operand = executor.next_operand(self)?;
                accumulator.remove_all(&operand);
            }
            CommandKind::Retain => {
                let operand = executor.next_operand(self)?;
                accumulator.retain_all(&operand);
            }
            CommandKind::StartsWith => {
                let word = executor.next_word(self)?;
                let expanded = executor.expand_prefix(&word);
                accumulator.union_with(&expanded);
            }
            CommandKind::Root => {
                let word = executor.next_word(self)?;
                let root = executor.stem(&word);
                let expanded = executor.expand_prefix(&root);
                accumulator.union_with(&expanded);
            }
            CommandKind::GroupOpen => {
                // A group at statement position unions in, like an
                // explicit add of the whole sub-expression.
                let group = executor.finish_group()?;
                accumulator.union_with(&group);
            }
            CommandKind::GroupClose => {
                return Err(CanticleError::syntax("unmatched brackets"));
            }
        }

        Ok(())
    }
}
