//! Pending edit state for the record, adjustment and delete dialogs.
//!
//! Forms hold raw text the way it was typed; `validate` turns them into request
//! bodies or a user-facing message. Nothing here performs I/O.

use bintrack_types::{Adjustment, Bin, BinId, Product, Record, RecordDraft, RecordId};

use crate::{Error, Result};

pub const MSG_SELECT_BIN: &str = "Please select a bin location";
pub const MSG_SELECT_PRODUCT: &str = "Please select a product";
pub const MSG_ENTER_CASES: &str = "Please enter case quantity";
pub const MSG_INVALID_CASES: &str = "Please enter a valid case quantity";
pub const MSG_INVALID_ADJUSTMENT: &str = "Please enter a valid adjustment amount";
pub const MSG_NO_RECORD: &str = "No record selected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Fields of the add/edit dialog.
///
/// `bin_text` and `product_text` are what the autocomplete inputs show;
/// the ids behind them are only set by selecting a suggestion (or by
/// pre-filling from an existing record).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordForm {
    pub mode: FormMode,
    pub bin_text: String,
    pub bin_id: Option<BinId>,
    pub product_text: String,
    pub product_upc: Option<String>,
    pub product_description: String,
    pub qty_per_case: String,
    pub qty_cases: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::create()
    }
}

impl RecordForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            bin_text: String::new(),
            bin_id: None,
            product_text: String::new(),
            product_upc: None,
            product_description: String::new(),
            qty_per_case: String::new(),
            qty_cases: String::new(),
        }
    }

    /// Pre-fill from a stored record.
    pub fn for_edit(record: &Record) -> Self {
        let description = record.description().to_string();
        Self {
            mode: FormMode::Edit(record.id),
            bin_text: record.bin_location_name().to_string(),
            bin_id: record.bin_location_id,
            product_text: description.clone(),
            product_upc: record.product_upc.clone().filter(|upc| !upc.is_empty()),
            product_description: description,
            qty_per_case: record
                .qty_per_case()
                .map(format_qty)
                .unwrap_or_default(),
            qty_cases: record.cases().to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Record",
            FormMode::Edit(_) => "Edit Record",
        }
    }

    /// Typing in the bin field invalidates a previous selection.
    pub fn edit_bin_text(&mut self, text: impl Into<String>) {
        self.bin_text = text.into();
        self.bin_id = None;
    }

    pub fn edit_product_text(&mut self, text: impl Into<String>) {
        self.product_text = text.into();
        self.product_upc = None;
        self.product_description.clear();
    }

    pub fn select_bin(&mut self, bin: &Bin) {
        self.bin_text = bin.name().to_string();
        self.bin_id = Some(bin.id);
    }

    /// Copies UPC, description and the product's default case size.
    pub fn select_product(&mut self, product: &Product) {
        self.product_text = product.description().to_string();
        self.product_upc = Some(product.upc().to_string());
        self.product_description = product.description().to_string();
        self.qty_per_case = product
            .qty_per_case()
            .map(format_qty)
            .unwrap_or_default();
    }

    pub fn validate(&self) -> Result<RecordDraft> {
        let bin_location_id = self.bin_id.ok_or_else(|| Error::validation(MSG_SELECT_BIN))?;

        let product_upc = match self.product_upc.as_deref() {
            Some(upc) if !upc.trim().is_empty() => upc.trim().to_string(),
            _ => return Err(Error::validation(MSG_SELECT_PRODUCT)),
        };

        let cases = self.qty_cases.trim();
        if cases.is_empty() {
            return Err(Error::validation(MSG_ENTER_CASES));
        }
        let qty_cases: i64 = cases
            .parse()
            .ok()
            .filter(|n| *n >= 0)
            .ok_or_else(|| Error::validation(MSG_INVALID_CASES))?;

        // Unparsable or zero reads as "not set".
        let qty_per_case = self
            .qty_per_case
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite() && *q > 0.0);

        Ok(RecordDraft {
            bin_location_id,
            product_upc,
            product_description: self.product_description.clone(),
            qty_per_case,
            qty_cases,
        })
    }
}

fn format_qty(qty: f64) -> String {
    if qty.fract() == 0.0 {
        format!("{}", qty as i64)
    } else {
        qty.to_string()
    }
}

/// Quantity adjustment dialog. Deltas may be negative; zero is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustForm {
    pub label: String,
    pub current_cases: i64,
    pub delta: String,
    pub notes: String,
}

impl AdjustForm {
    pub const NOTES_LIMIT: usize = 500;

    pub fn for_record(record: &Record) -> Self {
        Self {
            label: format!(
                "{} @ {}",
                display_or_na(record.description()),
                display_or_na(record.bin_location_name())
            ),
            current_cases: record.cases(),
            delta: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_delta(mut self, delta: i64) -> Self {
        self.delta = delta.to_string();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn notes_len(&self) -> usize {
        self.notes.chars().count()
    }

    fn parsed_delta(&self) -> Option<i64> {
        self.delta.trim().parse::<i64>().ok().filter(|d| *d != 0)
    }

    /// Case count after applying the delta, if the delta is valid and the
    /// sum fits.
    pub fn projected_cases(&self) -> Option<i64> {
        self.parsed_delta().and_then(|d| self.current_cases.checked_add(d))
    }

    pub fn validate(&self) -> Result<Adjustment> {
        let adjustment = self
            .parsed_delta()
            .ok_or_else(|| Error::validation(MSG_INVALID_ADJUSTMENT))?;

        let notes = self.notes.trim();
        Ok(Adjustment {
            adjustment,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// What the user is about to delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub record_id: RecordId,
    pub bin_location: String,
    pub product: String,
    pub cases: i64,
}

impl DeleteConfirmation {
    pub fn for_record(record: &Record) -> Self {
        Self {
            record_id: record.id,
            bin_location: display_or_na(record.bin_location_name()).to_string(),
            product: display_or_na(record.description()).to_string(),
            cases: record.cases(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Bin Location: {}\nProduct: {}\nQuantity: {} cases",
            self.bin_location, self.product, self.cases
        )
    }
}

pub(crate) fn display_or_na(text: &str) -> &str {
    if text.is_empty() { "N/A" } else { text }
}

/// Dialog currently open in the session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    None,
    Record(RecordForm),
    Adjust {
        id: RecordId,
        form: AdjustForm,
    },
    Delete(DeleteConfirmation),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }
}
