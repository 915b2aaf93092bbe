//! Typed API operations. Each one builds an [`ApiCall`] and executes it.

use crate::domain::{
    ApiCall, GroupName, MessageText, RawPhoneNumber, ResponseEnvelope, SendSmsOptions,
    SenderSign, ViberChannel,
};

use super::{SmsAeroClient, SmsAeroError};

impl SmsAeroClient {
    /// Check that the credential is accepted (`auth`).
    pub async fn is_authorized(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::auth()).await
    }

    pub async fn tariffs(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::tariffs()).await
    }

    /// Sender signatures available to the account.
    pub async fn sign_list(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::sign_list()).await
    }

    /// Account balance, e.g. `{"data": {"balance": 337.03}}`.
    pub async fn balance(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::balance()).await
    }

    /// Top up the balance from a card returned by [`SmsAeroClient::cards`].
    pub async fn add_balance(
        &self,
        sum: u64,
        card_id: u64,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::add_balance(sum, card_id)).await
    }

    pub async fn cards(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::cards()).await
    }

    /// Send an SMS. In test mode this goes to `sms/testsend` and nothing is delivered.
    ///
    /// Errors:
    /// - [`SmsAeroError::Api`] when SMS Aero rejects the message (e.g. unknown sign),
    /// - [`SmsAeroError::Network`] when no gateway could be reached.
    pub async fn send_sms(
        &self,
        number: &RawPhoneNumber,
        text: &MessageText,
        sign: &SenderSign,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.send_sms_with(number, text, sign, &SendSmsOptions::default())
            .await
    }

    /// Send an SMS with scheduling and delivery callback options.
    pub async fn send_sms_with(
        &self,
        number: &RawPhoneNumber,
        text: &MessageText,
        sign: &SenderSign,
        options: &SendSmsOptions,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::send_sms(number, text, sign, options))
            .await
    }

    /// Delivery status of a sent SMS (`sms/status`, or `sms/teststatus` in test mode).
    pub async fn sms_status(&self, sms_id: u64) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::sms_status(sms_id)).await
    }

    /// Sent messages. Pass [`CallOverrides::page`](crate::CallOverrides::page)
    /// through [`SmsAeroClient::execute_with`] to fetch further pages.
    pub async fn sms_list(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::sms_list()).await
    }

    pub async fn number_operator(
        &self,
        number: &RawPhoneNumber,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::number_operator(number)).await
    }

    pub async fn group_add(&self, name: &GroupName) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::group_add(name)).await
    }

    pub async fn group_list(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::group_list()).await
    }

    pub async fn group_delete(&self, group_id: u64) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::group_delete(group_id)).await
    }

    pub async fn group_delete_all(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::group_delete_all()).await
    }

    pub async fn blacklist_add(
        &self,
        number: &RawPhoneNumber,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::blacklist_add(number)).await
    }

    pub async fn blacklist_list(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::blacklist_list()).await
    }

    pub async fn blacklist_delete(
        &self,
        blacklist_id: u64,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::blacklist_delete(blacklist_id)).await
    }

    /// Start an HLR lookup; poll the result with [`SmsAeroClient::hlr_status`].
    pub async fn hlr_check(
        &self,
        number: &RawPhoneNumber,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::hlr_check(number)).await
    }

    pub async fn hlr_status(&self, hlr_id: u64) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::hlr_status(hlr_id)).await
    }

    /// Add a contact with no extra fields. Use [`ApiCall::contact_add`] with
    /// [`SmsAeroClient::execute_with`] to set `fname`, `lname` and the like.
    pub async fn contact_add(
        &self,
        number: &RawPhoneNumber,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::contact_add(number)).await
    }

    pub async fn contact_delete(&self, contact_id: u64) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::contact_delete(contact_id)).await
    }

    pub async fn contact_delete_all(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::contact_delete_all()).await
    }

    pub async fn contact_list(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::contact_list()).await
    }

    pub async fn viber_send(
        &self,
        sign: &SenderSign,
        channel: &ViberChannel,
        text: &MessageText,
        number: &RawPhoneNumber,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::viber_send(sign, channel, text, number))
            .await
    }

    pub async fn viber_sign_list(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::viber_sign_list()).await
    }

    pub async fn viber_list(&self) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::viber_list()).await
    }

    /// Per-number delivery statistics of a Viber sending.
    pub async fn viber_statistics(
        &self,
        sending_id: u64,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::viber_statistics(sending_id)).await
    }

    pub async fn send_telegram(
        &self,
        number: &RawPhoneNumber,
        code: u32,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::send_telegram(number, code)).await
    }

    /// Send a Telegram code, falling back to an SMS with `sign` and `text`.
    pub async fn send_telegram_with_fallback(
        &self,
        number: &RawPhoneNumber,
        code: u32,
        sign: &SenderSign,
        text: &MessageText,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::send_telegram_with_fallback(
            number, code, sign, text,
        ))
        .await
    }

    pub async fn telegram_status(
        &self,
        telegram_id: u64,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute(ApiCall::telegram_status(telegram_id)).await
    }
}
