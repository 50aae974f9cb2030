//! `add`, `update`, `adjust` and `delete`.
//!
//! Each command opens the same dialog the browser would, fills it from the
//! flags and submits it, so validation messages and the reload after a
//! successful write are shared with the TUI.

use super::HandlerContext;
use crate::presentation::presenters::{present_delete_confirmation, present_mutation};
use crate::presentation::view_models::MutationKind;
use anyhow::{Result, anyhow, bail};
use bintrack_runtime::{AdjustForm, InventorySession, Modal, SubmitOutcome};
use bintrack_types::{BinId, Product, RecordId};
use tracing::debug;

/// Flags shared by `add` and `update`. Quantities stay raw text so the form
/// reports bad input the same way the dialog does.
#[derive(Debug, Clone, Default)]
pub struct RecordArgs {
    pub bin_id: Option<i64>,
    pub upc: Option<String>,
    pub description: Option<String>,
    pub cases: Option<String>,
    pub qty_per_case: Option<String>,
}

async fn lookup_product(session: &InventorySession, upc: &str) -> Option<Product> {
    match session.api().search_products(upc).await {
        Ok(products) => products.into_iter().find(|p| p.upc() == upc),
        Err(err) => {
            debug!(upc, error = %err, "product lookup failed");
            None
        }
    }
}

/// Copy flags into the open record dialog.
///
/// A UPC without description or case size is looked up so the catalog
/// defaults apply; explicit flags always win.
async fn fill_record(session: &mut InventorySession, args: &RecordArgs) {
    let bins = session.bins();
    let upc = args.upc.as_deref().map(str::trim).filter(|u| !u.is_empty());
    let product = match upc {
        Some(upc) if args.description.is_none() || args.qty_per_case.is_none() => {
            lookup_product(session, upc).await
        }
        _ => None,
    };

    let Modal::Record(form) = session.modal_mut() else {
        return;
    };

    if let Some(id) = args.bin_id.map(BinId::new) {
        match bins.iter().find(|bin| bin.id == id) {
            Some(bin) => form.select_bin(bin),
            None => {
                form.bin_text = id.get().to_string();
                form.bin_id = Some(id);
            }
        }
    }

    match (&product, upc) {
        (Some(product), _) => form.select_product(product),
        (None, Some(upc)) => {
            form.product_text = upc.to_string();
            form.product_upc = Some(upc.to_string());
        }
        (None, None) => {}
    }

    if let Some(description) = &args.description {
        form.product_text = description.clone();
        form.product_description = description.clone();
    }
    if let Some(qty) = &args.qty_per_case {
        form.qty_per_case = qty.clone();
    }
    if let Some(cases) = &args.cases {
        form.qty_cases = cases.clone();
    }
}

pub(crate) async fn create(
    session: &mut InventorySession,
    args: &RecordArgs,
) -> Option<SubmitOutcome> {
    session.open_create();
    fill_record(session, args).await;
    session.submit_modal().await
}

pub(crate) async fn update(
    session: &mut InventorySession,
    id: RecordId,
    args: &RecordArgs,
) -> Option<SubmitOutcome> {
    if !session.open_edit(id) {
        return None;
    }
    fill_record(session, args).await;
    session.submit_modal().await
}

pub(crate) async fn adjust(
    session: &mut InventorySession,
    id: RecordId,
    by: Option<&str>,
    notes: Option<&str>,
) -> Option<SubmitOutcome> {
    if !session.open_adjust(id) {
        return None;
    }
    if let Modal::Adjust { form, .. } = session.modal_mut() {
        form.delta = by.unwrap_or_default().to_string();
        form.notes = notes.unwrap_or_default().to_string();
    }
    session.submit_modal().await
}

fn finish(
    ctx: &HandlerContext,
    session: &InventorySession,
    kind: MutationKind,
    record_id: Option<RecordId>,
    outcome: Option<SubmitOutcome>,
) -> Result<()> {
    match outcome {
        Some(outcome) if outcome.success => ctx.render(present_mutation(
            kind,
            record_id.map(RecordId::get),
            outcome,
            session.records().len(),
        )),
        Some(outcome) => Err(ctx.session_failure(session, &outcome.message)),
        None => Err(ctx.session_failure(session, "No record selected")),
    }
}

async fn loaded_session(ctx: &HandlerContext, with_bins: bool) -> Result<InventorySession> {
    let (mut session, _suggestions) = ctx.session()?;
    let loaded = if with_bins {
        session.start().await
    } else {
        session.reload().await
    };
    if !loaded {
        return Err(ctx.session_failure(&session, "Error connecting to server"));
    }
    Ok(session)
}

pub async fn handle_add(ctx: &HandlerContext, args: RecordArgs) -> Result<()> {
    let mut session = loaded_session(ctx, true).await?;
    let outcome = create(&mut session, &args).await;
    finish(ctx, &session, MutationKind::Create, None, outcome)
}

pub async fn handle_update(ctx: &HandlerContext, id: i64, args: RecordArgs) -> Result<()> {
    let id = RecordId::new(id);
    let mut session = loaded_session(ctx, true).await?;
    let outcome = update(&mut session, id, &args).await;
    finish(ctx, &session, MutationKind::Update, Some(id), outcome)
}

pub async fn handle_adjust(
    ctx: &HandlerContext,
    id: i64,
    by: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    if let Some(notes) = &notes
        && notes.chars().count() > AdjustForm::NOTES_LIMIT
    {
        bail!("Notes are limited to {} characters", AdjustForm::NOTES_LIMIT);
    }

    let id = RecordId::new(id);
    let mut session = loaded_session(ctx, false).await?;
    let outcome = adjust(&mut session, id, by.as_deref(), notes.as_deref()).await;
    finish(ctx, &session, MutationKind::Adjust, Some(id), outcome)
}

/// Without `yes` only the confirmation summary is shown; nothing is sent.
pub async fn handle_delete(ctx: &HandlerContext, id: i64, yes: bool) -> Result<()> {
    let id = RecordId::new(id);
    let mut session = loaded_session(ctx, false).await?;
    if !session.open_delete(id) {
        return Err(ctx.session_failure(&session, "No record selected"));
    }

    if !yes {
        let Modal::Delete(confirmation) = session.modal() else {
            return Err(anyhow!("No record selected"));
        };
        return ctx.render(present_delete_confirmation(confirmation));
    }

    let outcome = session.submit_modal().await;
    finish(ctx, &session, MutationKind::Delete, Some(id), outcome)
}
