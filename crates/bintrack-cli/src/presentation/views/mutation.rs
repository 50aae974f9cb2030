use std::fmt::{self, Write};

use super::preformatted;
use crate::presentation::view_models::{
    DeleteConfirmationViewModel, MutationKind, MutationViewModel, ViewMode,
};

pub struct MutationView<'a> {
    data: &'a MutationViewModel,
    mode: ViewMode,
}

impl<'a> MutationView<'a> {
    pub fn new(data: &'a MutationViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        let verb = match self.data.operation {
            MutationKind::Create => "created",
            MutationKind::Update => "updated",
            MutationKind::Adjust => "adjusted",
            MutationKind::Delete => "deleted",
        };
        match self.data.record_id {
            Some(id) => writeln!(w, "Record {} {}.", id, verb)?,
            None => writeln!(w, "Record {}.", verb)?,
        }
        writeln!(w, "Inventory reloaded: {} record(s).", self.data.record_count)
    }
}

impl<'a> fmt::Display for MutationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}

pub struct DeleteConfirmationView<'a> {
    data: &'a DeleteConfirmationViewModel,
    mode: ViewMode,
}

impl<'a> DeleteConfirmationView<'a> {
    pub fn new(data: &'a DeleteConfirmationViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        writeln!(w, "Bin Location: {}", self.data.bin_location)?;
        writeln!(w, "Product: {}", self.data.product)?;
        writeln!(w, "Quantity: {} cases", self.data.cases)
    }
}

impl<'a> fmt::Display for DeleteConfirmationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}
