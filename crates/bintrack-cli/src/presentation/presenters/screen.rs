//! Builds the browse screen from session state plus the handler's UI state.

use bintrack_runtime::{AutocompleteState, FormMode, InventorySession, Modal};
use tokio::time::Instant;

use super::catalog::{NO_BINS, NO_PRODUCTS, UNNAMED_BIN, UNNAMED_PRODUCT};
use super::inventory::present_inventory;
use crate::presentation::formatters::product_detail;
use crate::presentation::view_models::{
    FieldFocus, FormFieldViewModel, ModalViewModel, NoticeViewModel, ScreenViewModel,
    SuggestionItemViewModel, SuggestionListViewModel,
};

/// UI-only state the handler keeps between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenContext<'a> {
    pub server: &'a str,
    pub separator: &'a str,
    pub search_focused: bool,
    pub selected: usize,
    pub focus: FieldFocus,
}

fn field(label: &str, value: &str, focused: bool, selected: bool) -> FormFieldViewModel {
    FormFieldViewModel {
        label: label.to_string(),
        value: value.to_string(),
        focused,
        selected,
    }
}

fn bin_suggestions(session: &InventorySession) -> Option<SuggestionListViewModel> {
    let search = session.bin_search();
    match search.state() {
        AutocompleteState::Empty => Some(SuggestionListViewModel {
            items: Vec::new(),
            highlighted: None,
            empty_message: Some(NO_BINS.to_string()),
        }),
        AutocompleteState::Results(_) => Some(SuggestionListViewModel {
            items: search
                .dropdown()
                .items()
                .iter()
                .map(|bin| SuggestionItemViewModel {
                    primary: if bin.name().trim().is_empty() {
                        UNNAMED_BIN.to_string()
                    } else {
                        bin.name().to_string()
                    },
                    secondary: None,
                })
                .collect(),
            highlighted: search.dropdown().highlighted(),
            empty_message: None,
        }),
        AutocompleteState::Idle | AutocompleteState::Pending => None,
    }
}

fn product_suggestions(session: &InventorySession) -> Option<SuggestionListViewModel> {
    let search = session.product_search();
    match search.state() {
        AutocompleteState::Empty => Some(SuggestionListViewModel {
            items: Vec::new(),
            highlighted: None,
            empty_message: Some(NO_PRODUCTS.to_string()),
        }),
        AutocompleteState::Results(_) => Some(SuggestionListViewModel {
            items: search
                .dropdown()
                .items()
                .iter()
                .map(|product| SuggestionItemViewModel {
                    primary: if product.description().trim().is_empty() {
                        UNNAMED_PRODUCT.to_string()
                    } else {
                        product.description().to_string()
                    },
                    secondary: Some(product_detail(product.upc(), product.qty_per_case())),
                })
                .collect(),
            highlighted: search.dropdown().highlighted(),
            empty_message: None,
        }),
        AutocompleteState::Idle | AutocompleteState::Pending => None,
    }
}

pub fn present_modal(session: &InventorySession, focus: FieldFocus) -> Option<ModalViewModel> {
    match session.modal() {
        Modal::None => None,
        Modal::Record(form) => {
            let suggestions = match focus {
                FieldFocus::Bin => bin_suggestions(session),
                FieldFocus::Product => product_suggestions(session),
                _ => None,
            };
            Some(ModalViewModel::Record {
                title: form.title().to_string(),
                fields: vec![
                    field(
                        "Bin Location",
                        &form.bin_text,
                        focus == FieldFocus::Bin,
                        form.bin_id.is_some(),
                    ),
                    field(
                        "Product",
                        &form.product_text,
                        focus == FieldFocus::Product,
                        form.product_upc.is_some(),
                    ),
                    field(
                        "Qty per Case",
                        &form.qty_per_case,
                        focus == FieldFocus::QtyPerCase,
                        false,
                    ),
                    field(
                        "Case Quantity",
                        &form.qty_cases,
                        focus == FieldFocus::Cases,
                        false,
                    ),
                ],
                suggestions,
            })
        }
        Modal::Adjust { form, .. } => Some(ModalViewModel::Adjust {
            label: form.label.clone(),
            current_cases: form.current_cases,
            fields: vec![
                field("Adjustment", &form.delta, focus == FieldFocus::Delta, false),
                field("Notes", &form.notes, focus == FieldFocus::Notes, false),
            ],
            projected_cases: form.projected_cases(),
            notes_len: form.notes_len(),
            notes_limit: bintrack_runtime::AdjustForm::NOTES_LIMIT,
        }),
        Modal::Delete(confirmation) => Some(ModalViewModel::Delete {
            lines: confirmation.summary().lines().map(str::to_string).collect(),
        }),
    }
}

/// Which field a freshly opened dialog focuses first.
pub fn initial_focus(modal: &Modal) -> FieldFocus {
    match modal {
        Modal::Record(form) if matches!(form.mode, FormMode::Edit(_)) => FieldFocus::Cases,
        Modal::Adjust { .. } => FieldFocus::Delta,
        _ => FieldFocus::Bin,
    }
}

pub fn present_screen(
    session: &InventorySession,
    ctx: ScreenContext<'_>,
    now: Instant,
) -> ScreenViewModel {
    let visible = session.visible_records();
    let inventory = present_inventory(
        &visible,
        session.view(),
        session.search_input(),
        ctx.separator,
    );
    let selected = (!visible.is_empty()).then(|| ctx.selected.min(visible.len() - 1));

    ScreenViewModel {
        server: ctx.server.to_string(),
        search: session.search_input().to_string(),
        search_focused: ctx.search_focused,
        inventory,
        selected,
        busy: session.busy().is_busy(),
        notices: session
            .notices()
            .active(now)
            .map(|notice| NoticeViewModel {
                level: notice.level.into(),
                message: notice.message.clone(),
            })
            .collect(),
        modal: present_modal(session, ctx.focus),
    }
}
