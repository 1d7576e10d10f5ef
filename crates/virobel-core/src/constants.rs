/// Application constants
///
/// Hardcoded values used by the consultation endpoint, grouped by concern.
// ============================================================================
// Rate Limiting
// ============================================================================
/// Maximum accepted requests per client within one window
pub const RATE_LIMIT_MAX_REQUESTS: u32 = 5;

/// Rate limit window in seconds (1 hour)
pub const RATE_LIMIT_WINDOW_SECONDS: u64 = 60 * 60;

/// Number of tracked clients above which expired records are purged
pub const MAX_TRACKED_CLIENTS: usize = 10_000;

/// Client identity used when no forwarding header is present
pub const UNKNOWN_CLIENT_IP: &str = "unknown";

// ============================================================================
// Field Limits (UTF-16 code units)
// ============================================================================

pub const MAX_FULL_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 255;
pub const MAX_PHONE_LENGTH: usize = 30;
pub const MAX_LOCATION_LENGTH: usize = 200;
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Maximum accepted request body size (64 KB)
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Email Defaults
// ============================================================================

/// Sender identity for both outgoing emails
pub const DEFAULT_MAIL_FROM: &str = "Virobel <onboarding@resend.dev>";

/// Firm inbox that receives consultation notifications
pub const DEFAULT_NOTIFICATION_TO: &str = "contact@virobel.com";

/// Subject prefix of the firm notification; the requester name follows
pub const NOTIFICATION_SUBJECT_PREFIX: &str = "New Consultation Request from ";

/// Subject of the confirmation sent to the requester
pub const CONFIRMATION_SUBJECT: &str = "Thank you for your inquiry - Virobel";

/// Default Resend API base URL
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Default listen address for the standalone server
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

// ============================================================================
// Public Response Messages
// ============================================================================

pub const MSG_SUCCESS: &str = "Emails sent successfully";
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";
pub const MSG_VALIDATION_FAILED: &str = "Input validation failed";
pub const MSG_TOO_MANY_REQUESTS: &str = "Too many requests. Please try again later.";
pub const MSG_SEND_FAILED: &str = "Failed to send email. Please try again later.";

// ============================================================================
// CORS
// ============================================================================

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
