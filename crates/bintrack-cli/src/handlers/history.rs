use super::HandlerContext;
use crate::presentation::presenters::{present_history, present_history_stats};
use anyhow::{Result, bail};
use bintrack_types::{HistoryFilter, OperationType, RecordId};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct HistoryArgs {
    pub record_id: Option<i64>,
    pub operation: Option<OperationType>,
    pub user: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub limit: u32,
}

impl HistoryArgs {
    fn into_filter(self) -> Result<HistoryFilter> {
        let mut filter = HistoryFilter::new().limit(self.limit);
        if let Some(id) = self.record_id {
            filter = filter.record(RecordId::new(id));
        }
        if let Some(operation) = self.operation {
            filter = filter.operation(operation);
        }
        if let Some(user) = self.user.filter(|u| !u.trim().is_empty()) {
            filter = filter.username(user.trim());
        }
        if let Some(since) = self.since {
            filter = filter.since(check_date("--since", &since)?);
        }
        if let Some(until) = self.until {
            filter = filter.until(check_date("--until", &until)?);
        }
        Ok(filter)
    }
}

fn check_date(flag: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        bail!("{} expects a date like 2025-01-31, got '{}'", flag, value);
    }
    Ok(value.to_string())
}

pub async fn list(ctx: &HandlerContext, args: HistoryArgs) -> Result<()> {
    let limit = args.limit;
    let filter = args.into_filter()?;

    let api = ctx.api()?;
    let entries = api.history(&filter).await.map_err(|e| ctx.client_failure(e))?;
    ctx.render(present_history(&entries, limit))
}

pub async fn stats(ctx: &HandlerContext) -> Result<()> {
    let api = ctx.api()?;
    let stats = api.history_stats().await.map_err(|e| ctx.client_failure(e))?;
    ctx.render(present_history_stats(&stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_args() {
        let filter = HistoryArgs {
            record_id: Some(4),
            operation: Some(OperationType::Adjust),
            user: Some("  ".to_string()),
            since: Some("2025-01-01".to_string()),
            until: None,
            limit: 50,
        }
        .into_filter()
        .unwrap();

        assert_eq!(filter.record_id, Some(RecordId::new(4)));
        assert_eq!(filter.operation_type, Some(OperationType::Adjust));
        assert_eq!(filter.username, None);
        assert_eq!(filter.start_date.as_deref(), Some("2025-01-01"));
        assert_eq!(filter.limit, 50);
    }

    #[test]
    fn test_bad_date_is_rejected_before_any_request() {
        let err = HistoryArgs {
            until: Some("yesterday".to_string()),
            limit: 10,
            ..HistoryArgs::default()
        }
        .into_filter()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "--until expects a date like 2025-01-31, got 'yesterday'"
        );
    }
}
