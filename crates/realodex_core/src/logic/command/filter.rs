//! Narrows the displayed list to one filter criterion.

use crate::logic::command::{CommandOutcome, CommandResult};
use crate::logic::messages::persons_listed;
use crate::model::manager::ModelManager;
use crate::model::predicate::PersonFilter;

/// Narrows the displayed list to persons matching one criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCommand {
    filter: PersonFilter,
}

impl FilterCommand {
    pub const COMMAND_WORD: &'static str = "filter";
    pub const MESSAGE_USAGE: &'static str = "filter: Shows persons matching exactly one criterion.\n\
Parameters: n/KEYPHRASE | r/KEYPHRASE | t/TAG [t/TAG] | h/HOUSING_TYPE | b/MONTH\n\
Example: filter n/Alice or filter t/buyer t/seller or filter b/June";
    pub const MESSAGE_FILTER_CONFLICT: &'static str =
        "Only one filter category (n/, r/, t/, h/ or b/) can be used at a time.";
    pub const MESSAGE_FILTER_EMPTY_REMARK: &'static str =
        "Remark filter requires a non-empty keyphrase.";

    pub fn new(filter: PersonFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filter(Some(self.filter.clone()));
        let count = model.filtered_persons().len();
        Ok(CommandResult::new(persons_listed(count)))
    }
}
