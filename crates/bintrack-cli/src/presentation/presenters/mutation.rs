use bintrack_runtime::{DeleteConfirmation, SubmitOutcome};

use crate::presentation::view_models::{
    CommandResultViewModel, DeleteConfirmationViewModel, Guidance, MutationKind,
    MutationViewModel, StatusBadge,
};

pub fn present_mutation(
    operation: MutationKind,
    record_id: Option<i64>,
    outcome: SubmitOutcome,
    record_count: usize,
) -> CommandResultViewModel<MutationViewModel> {
    let badge = StatusBadge::success(outcome.message.clone());
    let content = MutationViewModel {
        operation,
        record_id,
        message: outcome.message,
        record_count,
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if operation != MutationKind::Delete {
        if let Some(id) = record_id {
            result = result.with_suggestion(
                Guidance::new("Review the audit trail")
                    .with_command(format!("bintrack history list --record-id {}", id)),
            );
        }
    }
    result
}

pub fn present_delete_confirmation(
    confirmation: &DeleteConfirmation,
) -> CommandResultViewModel<DeleteConfirmationViewModel> {
    let id = confirmation.record_id.get();
    let content = DeleteConfirmationViewModel {
        record_id: id,
        bin_location: confirmation.bin_location.clone(),
        product: confirmation.product.clone(),
        cases: confirmation.cases,
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::warning(
            "Are you sure you want to delete this record?",
        ))
        .with_suggestion(
            Guidance::new("Delete it").with_command(format!("bintrack delete {} --yes", id)),
        )
}
