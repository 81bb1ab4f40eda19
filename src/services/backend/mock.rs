//! Mock implementation of the platform backend.
//!
//! Serves deterministic seed records after a configurable latency so
//! the engine behaves like it is talking to a slow network. Fetches
//! clone from lazily built seed tables; mutations accept whatever the
//! caller sends and report success.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use tracing::debug;

use super::AdminBackend;
use crate::config::config;
use crate::error::{Error, Result};
use crate::models::{
    ActivityKind, ActivityLogEntry, ActorCategory, AthleteSummary, BrandSummary, ChatMessage,
    Contract, ContractParty, ContractStatus, Conversation, ConversationPriority,
    ConversationStatus, Currency, DashboardSnapshot, DashboardStats, EmailRecord, EmailStatus,
    LogSeverity, MessageKind, MessageSender, RecentActivity, User, UserCategory, UserStatus,
};

/// Simulated network delays for the two call classes.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    /// Applied to every fetch and auth call.
    pub fetch: Duration,
    /// Applied to email delivery.
    pub send: Duration,
}

impl LatencyProfile {
    /// Delays taken from the process configuration.
    pub fn from_config() -> Self {
        let latency = &config().latency;
        Self {
            fetch: Duration::from_millis(latency.fetch_ms),
            send: Duration::from_millis(latency.send_ms),
        }
    }

    /// No delays. Tests use this to keep the suite fast.
    pub fn instant() -> Self {
        Self {
            fetch: Duration::ZERO,
            send: Duration::ZERO,
        }
    }
}

/// Canned-data backend standing in for the platform API.
pub struct MockBackend {
    latency: LatencyProfile,
}

impl MockBackend {
    pub fn new(latency: LatencyProfile) -> Self {
        Self { latency }
    }

    async fn hold(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn user(
    id: u64,
    name: &str,
    email: &str,
    category: UserCategory,
    status: UserStatus,
    join_date: NaiveDate,
    last_login: NaiveDate,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        category,
        status,
        join_date,
        last_login: Some(last_login),
    }
}

static SEED_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user(
            1,
            "John Doe",
            "john@example.com",
            UserCategory::Athlete,
            UserStatus::Active,
            ymd(2024, 1, 15),
            ymd(2024, 1, 20),
        ),
        user(
            2,
            "Nike Inc",
            "contact@nike.com",
            UserCategory::Brand,
            UserStatus::Active,
            ymd(2024, 1, 10),
            ymd(2024, 1, 19),
        ),
        user(
            3,
            "Sarah Wilson",
            "sarah@example.com",
            UserCategory::Athlete,
            UserStatus::Inactive,
            ymd(2024, 1, 12),
            ymd(2024, 1, 18),
        ),
        user(
            4,
            "Adidas",
            "info@adidas.com",
            UserCategory::Brand,
            UserStatus::Active,
            ymd(2024, 1, 8),
            ymd(2024, 1, 20),
        ),
        user(
            5,
            "Mike Johnson",
            "mike@example.com",
            UserCategory::Athlete,
            UserStatus::Active,
            ymd(2024, 1, 14),
            ymd(2024, 1, 17),
        ),
    ]
});

fn contract(
    id: u64,
    athlete: (u64, &str, &str),
    brand: (u64, &str, &str),
    start_date: NaiveDate,
    end_date: NaiveDate,
    amount: u64,
    status: ContractStatus,
    terms: &str,
    created_date: NaiveDate,
    days_until_expiry: i64,
) -> Contract {
    Contract {
        id,
        athlete: ContractParty {
            id: athlete.0,
            name: athlete.1.to_string(),
            email: athlete.2.to_string(),
        },
        brand: ContractParty {
            id: brand.0,
            name: brand.1.to_string(),
            email: brand.2.to_string(),
        },
        start_date,
        end_date,
        amount,
        currency: Currency::Usd,
        status,
        terms: terms.to_string(),
        created_date,
        days_until_expiry,
    }
}

static SEED_CONTRACTS: Lazy<Vec<Contract>> = Lazy::new(|| {
    vec![
        contract(
            1,
            (1, "John Doe", "john@example.com"),
            (2, "Nike Inc", "contact@nike.com"),
            ymd(2024, 1, 1),
            ymd(2024, 12, 31),
            50_000,
            ContractStatus::Active,
            "Exclusive sponsorship deal with performance bonuses",
            ymd(2023, 12, 15),
            345,
        ),
        contract(
            2,
            (3, "Sarah Wilson", "sarah@example.com"),
            (4, "Adidas", "info@adidas.com"),
            ymd(2024, 1, 15),
            ymd(2024, 6, 15),
            25_000,
            ContractStatus::ExpiringSoon,
            "Social media promotion and event appearances",
            ymd(2024, 1, 10),
            3,
        ),
        contract(
            3,
            (5, "Mike Johnson", "mike@example.com"),
            (6, "Under Armour", "contact@underarmour.com"),
            ymd(2023, 6, 1),
            ymd(2023, 12, 1),
            30_000,
            ContractStatus::Expired,
            "Product endorsement and training gear",
            ymd(2023, 5, 20),
            -50,
        ),
        contract(
            4,
            (7, "Lisa Brown", "lisa@example.com"),
            (8, "Puma", "info@puma.com"),
            ymd(2024, 2, 1),
            ymd(2025, 2, 1),
            75_000,
            ContractStatus::Pending,
            "Multi-year partnership with renewal options",
            ymd(2024, 1, 25),
            365,
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn conversation(
    id: u64,
    brand: (&str, &str, &str),
    athlete: (&str, &str, &str, &str),
    last_message: &str,
    last_message_time: &str,
    status: ConversationStatus,
    unread_count: u32,
    total_messages: u32,
    start_date: NaiveDate,
    contract_value: &str,
    priority: ConversationPriority,
) -> Conversation {
    Conversation {
        id,
        brand: BrandSummary {
            name: brand.0.to_string(),
            avatar: brand.1.to_string(),
            email: brand.2.to_string(),
        },
        athlete: AthleteSummary {
            name: athlete.0.to_string(),
            avatar: athlete.1.to_string(),
            email: athlete.2.to_string(),
            sport: athlete.3.to_string(),
        },
        last_message: last_message.to_string(),
        last_message_time: last_message_time.to_string(),
        status,
        unread_count,
        total_messages,
        start_date,
        contract_value: contract_value.to_string(),
        priority,
    }
}

static SEED_CONVERSATIONS: Lazy<Vec<Conversation>> = Lazy::new(|| {
    vec![
        conversation(
            1,
            ("Nike Sports", "NS", "partnerships@nike.com"),
            ("Marcus Johnson", "MJ", "marcus.j@email.com", "Basketball"),
            "Looking forward to discussing the partnership details...",
            "2 hours ago",
            ConversationStatus::Active,
            3,
            47,
            ymd(2024, 1, 15),
            "$125,000",
            ConversationPriority::High,
        ),
        conversation(
            2,
            ("Adidas Performance", "AP", "talent@adidas.com"),
            ("Sarah Williams", "SW", "sarah.w@email.com", "Tennis"),
            "The campaign timeline looks perfect for our schedule.",
            "5 hours ago",
            ConversationStatus::Pending,
            0,
            23,
            ymd(2024, 1, 20),
            "$85,000",
            ConversationPriority::Medium,
        ),
        conversation(
            3,
            ("Under Armour", "UA", "partnerships@underarmour.com"),
            ("David Chen", "DC", "david.c@email.com", "Swimming"),
            "Thank you for the revised contract terms.",
            "1 day ago",
            ConversationStatus::Completed,
            0,
            156,
            ymd(2023, 12, 1),
            "$200,000",
            ConversationPriority::High,
        ),
        conversation(
            4,
            ("Puma Elite", "PE", "elite@puma.com"),
            ("Emma Rodriguez", "ER", "emma.r@email.com", "Soccer"),
            "Can we schedule a call to discuss the photo shoot?",
            "3 days ago",
            ConversationStatus::Active,
            1,
            34,
            ymd(2024, 1, 10),
            "$95,000",
            ConversationPriority::Medium,
        ),
        conversation(
            5,
            ("New Balance", "NB", "athletes@newbalance.com"),
            ("Alex Thompson", "AT", "alex.t@email.com", "Running"),
            "The product samples have been shipped to your address.",
            "1 week ago",
            ConversationStatus::Inactive,
            0,
            89,
            ymd(2023, 11, 15),
            "$150,000",
            ConversationPriority::Low,
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn log_entry(
    id: u64,
    kind: ActivityKind,
    title: &str,
    description: &str,
    user: &str,
    user_type: ActorCategory,
    severity: LogSeverity,
    timestamp: DateTime<Utc>,
    ip_address: &str,
    related_entity: Option<&str>,
) -> ActivityLogEntry {
    ActivityLogEntry {
        id,
        kind,
        title: title.to_string(),
        description: description.to_string(),
        user: user.to_string(),
        user_type,
        severity,
        timestamp,
        ip_address: ip_address.to_string(),
        related_entity: related_entity.map(str::to_string),
    }
}

static SEED_ACTIVITY: Lazy<Vec<ActivityLogEntry>> = Lazy::new(|| {
    vec![
        log_entry(
            1,
            ActivityKind::ContractSigned,
            "Contract Signed",
            "Mike signed a new contract with John Doe",
            "John Doe",
            ActorCategory::Admin,
            LogSeverity::Info,
            ts(2024, 1, 15, 10, 30),
            "192.168.1.100",
            Some("Contract #12345"),
        ),
        log_entry(
            2,
            ActivityKind::UserJoined,
            "New User Registration",
            "New user Sarah Wilson joined the platform",
            "Sarah Wilson",
            ActorCategory::User,
            LogSeverity::Info,
            ts(2024, 1, 15, 9, 15),
            "192.168.1.101",
            None,
        ),
        log_entry(
            3,
            ActivityKind::ContractExpiring,
            "Contract Expiring Soon",
            "Contract between Mike and John Doe will expire in 3 days",
            "Mike Johnson",
            ActorCategory::Admin,
            LogSeverity::Warning,
            ts(2024, 1, 15, 8, 45),
            "system",
            None,
        ),
        log_entry(
            4,
            ActivityKind::BrandJoined,
            "New Brand Registration",
            "Under Armour registered as a new brand",
            "Under Armour",
            ActorCategory::Brand,
            LogSeverity::Info,
            ts(2024, 1, 14, 16, 20),
            "192.168.1.102",
            None,
        ),
        log_entry(
            5,
            ActivityKind::ContractEnded,
            "Contract Terminated",
            "Contract between Lisa and Under Armour has ended",
            "Lisa Brown",
            ActorCategory::User,
            LogSeverity::Info,
            ts(2024, 1, 14, 14, 30),
            "system",
            None,
        ),
        log_entry(
            6,
            ActivityKind::LoginFailed,
            "Failed Login Attempt",
            "Multiple failed login attempts detected for user account",
            "john@example.com",
            ActorCategory::User,
            LogSeverity::Error,
            ts(2024, 1, 14, 12, 15),
            "192.168.1.103",
            None,
        ),
        log_entry(
            7,
            ActivityKind::PasswordChanged,
            "Password Changed",
            "User successfully changed their password",
            "Sarah Wilson",
            ActorCategory::User,
            LogSeverity::Info,
            ts(2024, 1, 14, 11, 0),
            "192.168.1.104",
            None,
        ),
        log_entry(
            8,
            ActivityKind::EmailSent,
            "Support Email Sent",
            "Support email sent to address regarding platform updates",
            "Admin",
            ActorCategory::Admin,
            LogSeverity::Info,
            ts(2024, 1, 14, 10, 30),
            "192.168.1.1",
            None,
        ),
        log_entry(
            9,
            ActivityKind::ContractModified,
            "Contract Modified",
            "Contract terms updated for Mike and John Doe partnership",
            "Admin",
            ActorCategory::Admin,
            LogSeverity::Info,
            ts(2024, 1, 14, 9, 45),
            "192.168.1.1",
            None,
        ),
        log_entry(
            10,
            ActivityKind::UserSuspended,
            "User Account Suspended",
            "User account temporarily suspended due to policy violation",
            "Admin",
            ActorCategory::Admin,
            LogSeverity::Warning,
            ts(2024, 1, 13, 15, 20),
            "192.168.1.1",
            None,
        ),
    ]
});

fn email(id: u64, subject: &str, recipients: &str, sent_date: NaiveDate) -> EmailRecord {
    EmailRecord {
        id,
        subject: subject.to_string(),
        recipients: recipients.to_string(),
        sent_date,
        status: EmailStatus::Sent,
    }
}

static SEED_EMAILS: Lazy<Vec<EmailRecord>> = Lazy::new(|| {
    vec![
        email(1, "Platform Update Notification", "All Users", ymd(2024, 1, 20)),
        email(
            2,
            "Contract Renewal Reminder",
            "John Doe, Sarah Wilson",
            ymd(2024, 1, 19),
        ),
        email(3, "Welcome to LockerAI", "Nike Inc", ymd(2024, 1, 18)),
    ]
});

/// Build the negotiation arc for one conversation. Every thread follows
/// the same eight beats, voiced with that conversation's participants
/// and dated from its start date.
fn transcript_for(conversation: &Conversation) -> Vec<ChatMessage> {
    let athlete_first = conversation
        .athlete
        .name
        .split_whitespace()
        .next()
        .unwrap_or("there");
    let brand_first = conversation
        .brand
        .name
        .split_whitespace()
        .next()
        .unwrap_or("Brand");
    let sport = conversation.athlete.sport.to_lowercase();
    let day_one = conversation.start_date;
    let day_two = day_one + chrono::Duration::days(1);

    let message = |id: u64,
                   sender: MessageSender,
                   body: String,
                   day: NaiveDate,
                   clock: &str,
                   kind: MessageKind| ChatMessage {
        id,
        sender,
        message: body,
        timestamp: format!("{} {}", day.format("%Y-%m-%d"), clock),
        kind,
    };

    vec![
        message(
            1,
            MessageSender::Brand,
            format!(
                "Hi {}! We're excited about the possibility of working together.",
                athlete_first
            ),
            day_one,
            "10:30 AM",
            MessageKind::Text,
        ),
        message(
            2,
            MessageSender::Athlete,
            "Thank you for reaching out! I'm definitely interested in learning more.".to_string(),
            day_one,
            "11:15 AM",
            MessageKind::Text,
        ),
        message(
            3,
            MessageSender::Brand,
            format!(
                "Great! We have a campaign coming up that would be perfect for your {} profile.",
                sport
            ),
            day_one,
            "11:45 AM",
            MessageKind::Text,
        ),
        message(
            4,
            MessageSender::Brand,
            "Here's the initial contract draft for your review.".to_string(),
            day_one,
            "02:30 PM",
            MessageKind::File {
                file_name: format!("{}_Partnership_Contract_Draft.pdf", brand_first),
            },
        ),
        message(
            5,
            MessageSender::Athlete,
            "I've reviewed the contract. The terms look good overall, but I have a few \
             questions about the exclusivity clause."
                .to_string(),
            day_two,
            "09:20 AM",
            MessageKind::Text,
        ),
        message(
            6,
            MessageSender::Brand,
            "Of course! Let's schedule a call to discuss any concerns you have.".to_string(),
            day_two,
            "10:45 AM",
            MessageKind::Text,
        ),
        message(
            7,
            MessageSender::Athlete,
            "Perfect! I'm available tomorrow afternoon or Thursday morning.".to_string(),
            day_two,
            "11:30 AM",
            MessageKind::Text,
        ),
        message(
            8,
            MessageSender::Brand,
            "Thursday morning works great. I'll send you a calendar invite.".to_string(),
            day_two,
            "12:15 PM",
            MessageKind::Text,
        ),
    ]
}

#[async_trait]
impl AdminBackend for MockBackend {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.hold(self.latency.fetch).await;
        Ok(SEED_USERS.clone())
    }

    async fn fetch_contracts(&self) -> Result<Vec<Contract>> {
        self.hold(self.latency.fetch).await;
        Ok(SEED_CONTRACTS.clone())
    }

    async fn fetch_conversations(&self) -> Result<Vec<Conversation>> {
        self.hold(self.latency.fetch).await;
        Ok(SEED_CONVERSATIONS.clone())
    }

    async fn fetch_transcript(&self, conversation_id: u64) -> Result<Vec<ChatMessage>> {
        self.hold(self.latency.fetch).await;
        let conversation = SEED_CONVERSATIONS
            .iter()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| Error::NotFound(format!("conversation {}", conversation_id)))?;
        Ok(transcript_for(conversation))
    }

    async fn fetch_activity_log(&self) -> Result<Vec<ActivityLogEntry>> {
        self.hold(self.latency.fetch).await;
        Ok(SEED_ACTIVITY.clone())
    }

    async fn fetch_email_history(&self) -> Result<Vec<EmailRecord>> {
        self.hold(self.latency.fetch).await;
        Ok(SEED_EMAILS.clone())
    }

    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot> {
        self.hold(self.latency.fetch).await;
        Ok(DashboardSnapshot {
            stats: DashboardStats {
                total_users: 1247,
                total_athletes: 823,
                total_brands: 424,
                active_contracts: 156,
                pending_emails: 23,
            },
            recent_activities: vec![
                RecentActivity {
                    id: 1,
                    kind: ActivityKind::ContractSigned,
                    message: "Nike signed contract with John Doe".to_string(),
                    time: "2 hours ago".to_string(),
                },
                RecentActivity {
                    id: 2,
                    kind: ActivityKind::UserJoined,
                    message: "New athlete Sarah Wilson joined".to_string(),
                    time: "4 hours ago".to_string(),
                },
                RecentActivity {
                    id: 3,
                    kind: ActivityKind::ContractExpiring,
                    message: "Contract between Adidas and Mike Johnson ending in 2 days"
                        .to_string(),
                    time: "6 hours ago".to_string(),
                },
                RecentActivity {
                    id: 4,
                    kind: ActivityKind::BrandJoined,
                    message: "New brand Under Armour registered".to_string(),
                    time: "1 day ago".to_string(),
                },
                RecentActivity {
                    id: 5,
                    kind: ActivityKind::ContractEnded,
                    message: "Contract between Puma and Lisa Brown ended".to_string(),
                    time: "2 days ago".to_string(),
                },
            ],
        })
    }

    async fn send_support_email(&self, record: EmailRecord) -> Result<EmailRecord> {
        self.hold(self.latency.send).await;
        debug!(id = record.id, recipients = %record.recipients, "support email delivered");
        Ok(record)
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<()> {
        self.hold(self.latency.fetch).await;
        debug!(email, "sign-in accepted");
        Ok(())
    }

    async fn request_reset_code(&self, email: &str) -> Result<()> {
        self.hold(self.latency.fetch).await;
        let code: u32 = rand::thread_rng().gen_range(100_000..=999_999);
        debug!(email, code, "verification code issued");
        Ok(())
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<()> {
        self.hold(self.latency.fetch).await;
        debug!(email, code, "verification code accepted");
        Ok(())
    }

    async fn update_password(&self, email: &str, _new_password: &str) -> Result<()> {
        self.hold(self.latency.fetch).await;
        debug!(email, "password updated");
        Ok(())
    }
}
