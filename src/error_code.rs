//! Catalog of the numeric error codes returned by the Postmark API.
//!
//! See the [API documentation](https://postmarkapp.com/developer/api/overview#error-codes).

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

macro_rules! error_codes {
    ($( $(#[$meta:meta])* $variant:ident = $code:literal => $description:literal, )+) => {
        /// An error code reported in the `ErrorCode` field of an API response.
        ///
        /// Codes that are not in this catalog decode to [`ErrorCode::Unknown`]
        /// instead of failing, so new server-side codes never break callers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum ErrorCode {
            $( $(#[$meta])* $variant, )+
            /// The code was not recognized by this crate.
            Unknown,
        }

        impl ErrorCode {
            /// Look up the variant for a numeric code.
            ///
            /// This is total: any value outside the catalog yields [`ErrorCode::Unknown`].
            pub fn from_code(code: i64) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    _ => Self::Unknown,
                }
            }

            /// The numeric code as sent by the API. [`ErrorCode::Unknown`] is `-1`.
            pub fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unknown => -1,
                }
            }

            /// Human-readable explanation of the code, as documented by Postmark.
            pub fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $description, )+
                    Self::Unknown => "An unexpected or unknown error code was received.",
                }
            }
        }
    };
}

error_codes! {
    /// No error.
    Ok = 0 => "No error.",
    BadOrMissingToken = 10 => "Bad or missing API token. Your request did not contain the correct API token in the header.",
    ApiMaintenance = 100 => "Maintenance. The Postmark API is offline for maintenance.",
    InvalidEmailRequest = 300 => "Invalid email request. Validation failed for the email request JSON data that you provided.",
    SenderSignatureNotFound = 400 => "Sender Signature not found. You're trying to send email with a From address that doesn't have a sender signature.",
    SenderSignatureNotConfirmed = 401 => "Sender signature not confirmed. You're trying to send email with a From address that doesn't have a confirmed sender signature.",
    InvalidJson = 402 => "Invalid JSON. The JSON data you provided is syntactically incorrect.",
    IncompatibleJson = 403 => "Incompatible JSON. The JSON data you provided is syntactically correct, but still doesn't contain the fields we expect.",
    OutOfCredits = 405 => "Not allowed to send. Your account has run out of credits.",
    InactiveRecipient = 406 => "Inactive recipient. You tried to send email to a recipient that has been marked as inactive after a hard bounce or a spam complaint.",
    ContentTypeHeaderMissing = 409 => "JSON required. Your HTTP request doesn't have the Accept and Content-Type headers set to application/json.",
    TooManyBatchMessages = 410 => "Too many batch messages. Your batched request contains more than 500 messages.",
    ForbiddenAttachmentType = 411 => "Forbidden attachment type. The file type of the attachment isn't allowed.",
    AccountPendingApproval = 412 => "Account is pending. While an account is pending approval, recipients must have the same domain as the From address.",
    AccountMayNotSend = 413 => "Account may not send. The account that is associated with the send request is not approved for sending.",
    AccountRateLimitExceeded = 429 => "Rate limit exceeded. Please reduce the concurrency and request rate of your requests.",
    InvalidSenderSignature = 500 => "Sender signature query exception. You provided invalid querystring parameters in your request.",
    SenderSignatureNotFoundById = 501 => "Sender Signature not found by id. We couldn't locate the Sender Signature you're trying to manage from the id passed in.",
    NoUpdatedSenderSignature = 502 => "No updated Sender Signature data received. You didn't pass in any valid updated Sender Signature data.",
    NoPublicDomainAllowedForSenderSignature = 503 => "You cannot use a public domain. You tried to create a Sender Signature with a public domain which isn't allowed.",
    SenderSignatureExists = 504 => "Sender Signature already exists. You tried to create a Sender Signature that already exists on Postmark.",
    DkimAlreadyScheduledForRenewal = 505 => "DKIM already scheduled for renewal. The DKIM you tried to renew is already scheduled to be renewed.",
    SenderSignatureAlreadyConfirmed = 506 => "This Sender Signature already confirmed. The signature you tried to resend a confirmation to has already been confirmed.",
    SenderSignatureNotOwnedByYou = 507 => "You do not own this Sender Signature. This Sender Signature cannot be found using your credentials.",
    DomainNotFound = 510 => "This domain was not found. We couldn't locate the Domain you're trying to manage from the id passed in.",
    InvalidDomainData = 511 => "Invalid fields supplied. You didn't pass in any valid Domain data.",
    DomainAlreadyExists = 512 => "Domain already exists. You tried to create a Domain that already exists on your account.",
    DomainNotOwnedByYou = 513 => "You do not own this Domain. This Domain cannot be found using your credentials.",
    NameRequiredForDomain = 514 => "Name is a required field to create a Domain.",
    NameTooLongForDomain = 515 => "Name field must be less than or equal to 255 characters.",
    NameFormatInvalidForDomain = 516 => "Name format is invalid. The Name you have specified for this Domain is formatted incorrectly.",
    MissingRequiredFieldForSenderSignature = 520 => "You are missing a required field to create a Sender Signature. You must supply a value for Name and FromEmail.",
    FieldTooLongForSenderSignatureRequest = 521 => "A field in the Sender Signature request is too long. View the Message property of the response for details.",
    ValueFieldIsInvalid = 522 => "Value for field is invalid. View the Message property of the response for details.",
    ServerQueryException = 600 => "Server query exception. You provided invalid querystring parameters in your request.",
    ServerDoesNotExist = 601 => "Server does not exist. You tried to manage a server that doesn't exist with your credentials.",
    DuplicateInboundDomain = 602 => "Duplicate Inbound Domain. The Inbound Domain you specified is already in use on Postmark.",
    ServerNameAlreadyExists = 603 => "Server name already exists. You tried to create a Server name that already exists in your list.",
    NoDeleteServerAccess = 604 => "You don't have delete access. You don't have permission to delete Servers through the API.",
    UnableToDeleteServer = 605 => "Unable to delete Server. We couldn't delete this Server. Please contact support.",
    InvalidWebhookUrl = 606 => "Invalid webhook URL. The webhook URL you're trying to use is invalid or contains an internal IP range.",
    InvalidServerColor = 607 => "Invalid Server color. The server color you specified isn't supported.",
    ServerNameMissingOrInvalid = 608 => "Server name missing or invalid. The Server name you provided is invalid or missing.",
    NoUpdatedServerDataReceived = 609 => "No updated Server data received. You didn't pass in any valid updated Server data.",
    InvalidMxRecordForInboundDomain = 610 => "Invalid MX record for Inbound Domain. The Inbound Domain provided doesn't have an MX record value of inbound.postmarkapp.com.",
    InboundSpamThresholdValueIsInvalid = 611 => "InboundSpamThreshold value is invalid. Please use a number between 0 and 30 in increments of 5.",
    MessagesQueryException = 700 => "Messages query exception. You provided invalid querystring parameters in your request.",
    MessageDoesntExist = 701 => "Message doesn't exist. This message doesn't exist.",
    CouldNotBypassBlockedInboundMessage = 702 => "Could not bypass this blocked inbound message, please contact support.",
    CouldNotRetryFailedInboundMessage = 703 => "Could not retry this failed inbound message, please contact support.",
    TriggerQueryException = 800 => "Trigger query exception. You provided invalid querystring parameters in your request.",
    NoTriggerDataReceived = 809 => "No trigger data received. You didn't provide JSON body parameters in your request.",
    InboundRuleAlreadyExists = 810 => "This inbound rule already exists. Please choose a unique rule to add.",
    UnableToRemoveInboundRule = 811 => "Unable to remove this inbound rule, please contact support.",
    InboundRuleNotFound = 812 => "This inbound rule was not found. The inbound rule you are trying to administer does not exist for this server.",
    InvalidEmailOrDomain = 813 => "Not a valid email address or domain. Please use a valid email address or domain to set up an inbound domain rule.",
    StatsQueryException = 900 => "Stats query exception. You provided invalid querystring parameters in your request.",
    BouncesQueryException = 1000 => "Bounces query exception. You provided invalid querystring parameters in your request.",
    BounceNotFound = 1001 => "Bounce was not found. The BounceID or MessageID you are searching with is invalid.",
    BounceIdParameterRequired = 1002 => "BounceID parameter required. You must supply a BounceID to get the bounce dump.",
    CannotActivateBounce = 1003 => "Cannot activate bounce. Certain bounces and SPAM complaints cannot be activated by the user.",
    TemplateQueryException = 1100 => "Template query exception. The value of a GET parameter for the request is not valid.",
    TemplateNotFound = 1101 => "Template not found. The TemplateId, LayoutTemplate, or Alias references a Template that does not exist.",
    TemplateLimitWouldBeExceeded = 1105 => "Template limit would be exceeded. A Server may have up to 100 templates.",
    NoTemplateDataReceived = 1109 => "No Template data received. You didn't provide JSON body parameters in your request.",
    RequiredTemplateFieldMissing = 1120 => "A required Template field is missing from the body of the POST request.",
    TemplateFieldTooLarge = 1121 => "Template field is too large. One of the values of the request's body exceeds our size restrictions for that field.",
    TemplateFieldInvalid = 1122 => "A Templated field has been submitted that is invalid.",
    TemplateFieldNotAllowed = 1123 => "A field was included in the request body that is not allowed.",
    TemplateTypesMismatch = 1125 => "The template types don't match on the source and destination servers.",
    LayoutTemplateCannotBeDeleted = 1130 => "The layout template cannot be deleted because it has dependent templates using it.",
    LayoutContentPlaceholderMustBePresentOnce = 1131 => "The layout content placeholder must be present in the layout HTML and/or Text body exactly once.",
    MessageStreamTypeInvalid = 1221 => "The 'MessageStreamType' associated with this request was invalid.",
    IdMustBeProvided = 1222 => "A valid 'ID' must be provided.",
    NameMustBeProvided = 1223 => "A valid 'Name' must be provided. A Stream name cannot be null or whitespace.",
    NameTooLong = 1224 => "The 'Name' is too long, it is limited to 100 characters.",
    MaxNumberOfMessageStreams = 1225 => "You have reached the maximum number of message streams for this server.",
    MessageStreamNotFound = 1226 => "The message stream for the provided 'ID' was not found.",
    IdMustBeNonEmptyStringStartingWithEnglishLetter = 1227 => "The 'ID' must be a non-empty string starting with a letter of the English alphabet, limited to 30 characters.",
    ServerCanOnlyHaveOneInboundStream = 1228 => "A server can only have one inbound stream.",
    CannotArchiveDefaultTransactionalAndInboundStreams = 1229 => "You cannot archive the default transactional and inbound streams.",
    IdAlreadyExists = 1230 => "The 'ID' provided already exists for this server.",
    DescriptionTooLong = 1231 => "The 'Description' is too long, it is limited to 1000 characters.",
    CannotUnarchiveMessageStream = 1232 => "You cannot unarchive this message stream anymore.",
    IdMustNotStartWithPmPrefix = 1233 => "The 'ID' must not start with the 'pm-' prefix.",
    DescriptionMustNotContainHtml = 1234 => "The 'Description' must not contain HTML tags.",
    MessageStreamDoesNotExist = 1235 => "The 'MessageStream' provided does not exist on this server.",
    SendingNotSupportedForThisMessageStream = 1236 => "Sending is not supported on the supplied 'MessageStream'.",
    IdReserved = 1237 => "This 'ID' is reserved. Please use a different ID.",
}

impl ErrorCode {
    /// Returns `true` for [`ErrorCode::Ok`].
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.description(), self.code())
    }
}

/// Any JSON number is accepted; values that cannot be a known code become [`ErrorCode::Unknown`].
impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ErrorCodeVisitor)
    }
}

struct ErrorCodeVisitor;

impl Visitor<'_> for ErrorCodeVisitor {
    type Value = ErrorCode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer error code")
    }

    fn visit_i64<E: de::Error>(self, code: i64) -> std::result::Result<ErrorCode, E> {
        Ok(ErrorCode::from_code(code))
    }

    fn visit_u64<E: de::Error>(self, code: u64) -> std::result::Result<ErrorCode, E> {
        Ok(i64::try_from(code).map_or(ErrorCode::Unknown, ErrorCode::from_code))
    }

    fn visit_i128<E: de::Error>(self, code: i128) -> std::result::Result<ErrorCode, E> {
        Ok(i64::try_from(code).map_or(ErrorCode::Unknown, ErrorCode::from_code))
    }

    fn visit_u128<E: de::Error>(self, code: u128) -> std::result::Result<ErrorCode, E> {
        Ok(i64::try_from(code).map_or(ErrorCode::Unknown, ErrorCode::from_code))
    }

    // Integers past u64 arrive as floats.
    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<ErrorCode, E> {
        Ok(ErrorCode::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_ok() {
        assert_eq!(ErrorCode::from_code(0), ErrorCode::Ok);
        assert!(ErrorCode::from_code(0).is_ok());
    }

    #[test]
    fn known_codes_resolve_to_their_variant() {
        assert_eq!(ErrorCode::from_code(10), ErrorCode::BadOrMissingToken);
        assert_eq!(ErrorCode::from_code(300), ErrorCode::InvalidEmailRequest);
        assert_eq!(ErrorCode::from_code(429), ErrorCode::AccountRateLimitExceeded);
        assert_eq!(ErrorCode::from_code(1237), ErrorCode::IdReserved);
    }

    #[test]
    fn codes_outside_the_catalog_are_unknown() {
        for code in [-1, 1, 11, 301, 404, 999, 1238, i64::MIN, i64::MAX] {
            assert_eq!(ErrorCode::from_code(code), ErrorCode::Unknown, "code {code}");
        }
    }

    #[test]
    fn code_is_inverse_of_lookup() {
        for code in [0, 10, 100, 300, 406, 513, 611, 813, 1003, 1131, 1236] {
            assert_eq!(ErrorCode::from_code(code).code(), code);
        }
        assert_eq!(ErrorCode::Unknown.code(), -1);
    }

    #[test]
    fn display_includes_description_and_code() {
        let rendered = ErrorCode::InvalidEmailRequest.to_string();
        assert!(rendered.starts_with("Invalid email request."));
        assert!(rendered.ends_with("(code 300)"));
    }

    #[test]
    fn deserializes_from_integer() {
        let code: ErrorCode = serde_json::from_str("406").unwrap();
        assert_eq!(code, ErrorCode::InactiveRecipient);

        let code: ErrorCode = serde_json::from_str("123456").unwrap();
        assert_eq!(code, ErrorCode::Unknown);
    }

    #[test]
    fn out_of_range_numbers_deserialize_as_unknown() {
        for raw in ["18446744073709551615", "9223372036854775808", "100000000000000000000000", "2.5"] {
            let code: ErrorCode = serde_json::from_str(raw).unwrap();
            assert_eq!(code, ErrorCode::Unknown, "input {raw}");
        }
    }

    #[test]
    fn non_numeric_code_is_rejected() {
        assert!(serde_json::from_str::<ErrorCode>("\"300\"").is_err());
    }
}
