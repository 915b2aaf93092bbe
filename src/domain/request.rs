use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;
use url::Url;

use crate::domain::mode::MethodPath;
use crate::domain::value::{
    FieldName, GroupName, MessageText, RawPhoneNumber, SenderSign, UnixTimestamp, ViberChannel,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// Scalar value of a request body field.
pub enum ParamValue {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Bool(bool),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Unsigned(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Flat request body: field name to scalar value, serialized as a JSON object.
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Chaining variant of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Merge extra fields on top of these params. Extra fields win on collision.
    pub fn merge_extra(mut self, extra: BTreeMap<FieldName, String>) -> Self {
        for (name, value) in extra {
            self.0.insert(name.into_string(), ParamValue::String(value));
        }
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default)]
/// Optional fields of `sms/send`.
pub struct SendSmsOptions {
    /// Scheduled send time; `None` sends immediately.
    pub date_send: Option<UnixTimestamp>,
    /// Delivery status webhook.
    pub callback_url: Option<Url>,
    /// Webhook payload format, e.g. `json`.
    pub callback_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One API operation: its method path plus body params.
///
/// Constructors take validated domain values, so a built call is always
/// well-formed; the client only has to pick the path for the current mode.
pub struct ApiCall {
    path: MethodPath,
    params: Params,
}

const ID_FIELD: &str = "id";

impl ApiCall {
    pub fn new(path: MethodPath, params: Params) -> Self {
        Self { path, params }
    }

    fn fixed(path: &'static str) -> Self {
        Self::new(MethodPath::Fixed(path), Params::new())
    }

    fn fixed_with(path: &'static str, params: Params) -> Self {
        Self::new(MethodPath::Fixed(path), params)
    }

    fn by_id(path: &'static str, id: u64) -> Self {
        Self::fixed_with(path, Params::new().with(ID_FIELD, id.to_string()))
    }

    fn by_number(path: &'static str, number: &RawPhoneNumber) -> Self {
        Self::fixed_with(
            path,
            Params::new().with(RawPhoneNumber::FIELD, number.raw()),
        )
    }

    pub fn path(&self) -> MethodPath {
        self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_parts(self) -> (MethodPath, Params) {
        (self.path, self.params)
    }

    pub fn auth() -> Self {
        Self::fixed("auth")
    }

    pub fn tariffs() -> Self {
        Self::fixed("tariffs")
    }

    pub fn sign_list() -> Self {
        Self::fixed("sign/list")
    }

    pub fn balance() -> Self {
        Self::fixed("balance")
    }

    /// Top up the balance from a linked card (`sum` in rubles).
    pub fn add_balance(sum: u64, card_id: u64) -> Self {
        Self::fixed_with(
            "balance/add",
            Params::new()
                .with("sum", sum.to_string())
                .with("card_id", card_id.to_string()),
        )
    }

    pub fn cards() -> Self {
        Self::fixed("cards")
    }

    pub fn send_sms(
        number: &RawPhoneNumber,
        text: &MessageText,
        sign: &SenderSign,
        options: &SendSmsOptions,
    ) -> Self {
        let mut params = Params::new()
            .with(RawPhoneNumber::FIELD, number.raw())
            .with(MessageText::FIELD, text.as_str())
            .with(SenderSign::FIELD, sign.as_str());
        if let Some(date_send) = options.date_send {
            params.insert(UnixTimestamp::FIELD, date_send.value());
        }
        if let Some(callback_url) = options.callback_url.as_ref() {
            params.insert("callbackUrl", callback_url.as_str());
        }
        if let Some(callback_format) = options.callback_format.as_deref() {
            params.insert("callbackFormat", callback_format);
        }
        Self::new(MethodPath::SMS_SEND, params)
    }

    pub fn sms_status(sms_id: u64) -> Self {
        Self::new(
            MethodPath::SMS_STATUS,
            Params::new().with(ID_FIELD, sms_id.to_string()),
        )
    }

    pub fn sms_list() -> Self {
        Self::new(MethodPath::SMS_LIST, Params::new())
    }

    pub fn number_operator(number: &RawPhoneNumber) -> Self {
        Self::by_number("number/operator", number)
    }

    pub fn group_add(name: &GroupName) -> Self {
        Self::fixed_with(
            "group/add",
            Params::new().with(GroupName::FIELD, name.as_str()),
        )
    }

    pub fn group_list() -> Self {
        Self::fixed("group/list")
    }

    pub fn group_delete(group_id: u64) -> Self {
        Self::by_id("group/delete", group_id)
    }

    pub fn group_delete_all() -> Self {
        Self::fixed("group/delete-all")
    }

    pub fn blacklist_add(number: &RawPhoneNumber) -> Self {
        Self::by_number("blacklist/add", number)
    }

    pub fn blacklist_list() -> Self {
        Self::fixed("blacklist/list")
    }

    pub fn blacklist_delete(blacklist_id: u64) -> Self {
        Self::by_id("blacklist/delete", blacklist_id)
    }

    pub fn hlr_check(number: &RawPhoneNumber) -> Self {
        Self::by_number("hlr/check", number)
    }

    pub fn hlr_status(hlr_id: u64) -> Self {
        Self::by_id("hlr/status", hlr_id)
    }

    /// Add a contact. Optional contact fields (`fname`, `lname`, ...) go through
    /// [`CallOverrides::extra_field`](crate::CallOverrides::extra_field).
    pub fn contact_add(number: &RawPhoneNumber) -> Self {
        Self::by_number("contact/add", number)
    }

    pub fn contact_delete(contact_id: u64) -> Self {
        Self::by_id("contact/delete", contact_id)
    }

    pub fn contact_delete_all() -> Self {
        Self::fixed("contact/delete-all")
    }

    pub fn contact_list() -> Self {
        Self::fixed("contact/list")
    }

    pub fn viber_send(
        sign: &SenderSign,
        channel: &ViberChannel,
        text: &MessageText,
        number: &RawPhoneNumber,
    ) -> Self {
        Self::fixed_with(
            "viber/send",
            Params::new()
                .with(RawPhoneNumber::FIELD, number.raw())
                .with(SenderSign::FIELD, sign.as_str())
                .with(ViberChannel::FIELD, channel.as_str())
                .with(MessageText::FIELD, text.as_str()),
        )
    }

    pub fn viber_sign_list() -> Self {
        Self::fixed("viber/sign/list")
    }

    pub fn viber_list() -> Self {
        Self::fixed("viber/list")
    }

    pub fn viber_statistics(sending_id: u64) -> Self {
        Self::fixed_with(
            "viber/statistic",
            Params::new().with("sendingId", sending_id.to_string()),
        )
    }

    /// Send a confirmation code through Telegram.
    pub fn send_telegram(number: &RawPhoneNumber, code: u32) -> Self {
        Self::fixed_with(
            "telegram/send",
            Params::new()
                .with(RawPhoneNumber::FIELD, number.raw())
                .with("code", code.to_string()),
        )
    }

    /// Send a confirmation code through Telegram, falling back to an SMS with
    /// `sign` and `text` when Telegram delivery is impossible.
    pub fn send_telegram_with_fallback(
        number: &RawPhoneNumber,
        code: u32,
        sign: &SenderSign,
        text: &MessageText,
    ) -> Self {
        let (path, params) = Self::send_telegram(number, code).into_parts();
        Self::new(
            path,
            params
                .with(SenderSign::FIELD, sign.as_str())
                .with(MessageText::FIELD, text.as_str()),
        )
    }

    pub fn telegram_status(telegram_id: u64) -> Self {
        Self::by_id("telegram/status", telegram_id)
    }
}
