use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::value::{FieldName, PageToken};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Adjustments that apply to exactly one call.
///
/// Overrides are passed by value into [`SmsAeroClient::execute_with`] or
/// [`SmsAeroClient::dispatch_with`] and consumed there, so they can never
/// bleed into another call sharing the same client.
///
/// [`SmsAeroClient::execute_with`]: crate::SmsAeroClient::execute_with
/// [`SmsAeroClient::dispatch_with`]: crate::SmsAeroClient::dispatch_with
pub struct CallOverrides {
    page: Option<PageToken>,
    extra: BTreeMap<FieldName, String>,
    timeout: Option<Duration>,
}

impl CallOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page of a paginated listing.
    pub fn page(mut self, page: impl Into<PageToken>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Add a body field, e.g. `fname` for `contact/add`. Later values for the
    /// same name replace earlier ones.
    pub fn extra_field(mut self, name: FieldName, value: impl Into<String>) -> Self {
        self.extra.insert(name, value.into());
        self
    }

    /// Bound the whole call, across every gateway attempt, by `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn page_token(&self) -> Option<&PageToken> {
        self.page.as_ref()
    }

    pub fn extra_fields(&self) -> &BTreeMap<FieldName, String> {
        &self.extra
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.extra.is_empty() && self.timeout.is_none()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Option<PageToken>,
        BTreeMap<FieldName, String>,
        Option<Duration>,
    ) {
        (self.page, self.extra, self.timeout)
    }
}
