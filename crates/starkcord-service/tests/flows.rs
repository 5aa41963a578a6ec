//! Scenario tests for the disconnect and analytics flows using in-memory
//! fake ports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use starkcord_core::entities::{GuildConfig, MemberLink};
use starkcord_core::traits::{
    GuildConfigRepository, GuildDirectory, GuildProfile, LinkRepository, RepoResult, RoleGateway,
    TokenValidator,
};
use starkcord_core::{DomainError, Network, Snowflake, WalletAddress};
use starkcord_service::{
    AnalyticsOutcome, AnalyticsService, DisconnectConfirm, DisconnectEntry, DisconnectService,
    ServiceContext, ServiceContextBuilder, DISCONNECT_CONFIRM_ID,
};

const GUILD: Snowflake = Snowflake::new(1_001);
const MEMBER: Snowflake = Snowflake::new(2_001);
const ROLE: Snowflake = Snowflake::new(3_001);

fn link(guild: Snowflake, member: Snowflake, network: &str) -> MemberLink {
    MemberLink::new(
        guild,
        member,
        WalletAddress::parse("0x04a1b2").unwrap(),
        Network::new(network),
    )
}

// ============================================================================
// Fake ports
// ============================================================================

#[derive(Default)]
struct FakeLinkRepo {
    links: Mutex<Vec<MemberLink>>,
    config: Mutex<Option<GuildConfig>>,
    soft_remove_calls: AtomicUsize,
    find_by_guild_calls: AtomicUsize,
}

impl FakeLinkRepo {
    fn with_links(links: Vec<MemberLink>) -> Self {
        Self {
            links: Mutex::new(links),
            ..Self::default()
        }
    }

    fn set_config(&self, config: GuildConfig) {
        *self.config.lock().unwrap() = Some(config);
    }

    fn active_count(&self, guild: Snowflake, member: Snowflake) -> usize {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.guild_id == guild && l.member_id == member && l.is_active())
            .count()
    }

    fn stored_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for FakeLinkRepo {
    async fn find_active(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<MemberLink>> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.guild_id == guild_id && l.member_id == member_id && l.is_active())
            .cloned()
            .collect())
    }

    async fn find_active_with_config(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<(MemberLink, GuildConfig)>> {
        let config = self
            .config
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| GuildConfig::new(guild_id, ROLE));
        Ok(self
            .find_active(guild_id, member_id)
            .await?
            .into_iter()
            .map(|l| (l, config.clone()))
            .collect())
    }

    async fn soft_remove(&self, ids: &[Uuid]) -> RepoResult<u64> {
        self.soft_remove_calls.fetch_add(1, Ordering::SeqCst);
        let mut links = self.links.lock().unwrap();
        let mut removed = 0;
        for l in links.iter_mut() {
            if ids.contains(&l.id) && l.is_active() {
                l.soft_remove();
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Vec<MemberLink>> {
        self.find_by_guild_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.guild_id == guild_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct FakeGuildRepo {
    config: Mutex<Option<GuildConfig>>,
    calls: AtomicUsize,
}

impl FakeGuildRepo {
    fn with_config(config: GuildConfig) -> Self {
        Self {
            config: Mutex::new(Some(config)),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GuildConfigRepository for FakeGuildRepo {
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Option<GuildConfig>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .config
            .lock()
            .unwrap()
            .clone()
            .filter(|c| c.guild_id == guild_id))
    }
}

struct FakeTokenValidator {
    valid: bool,
    calls: AtomicUsize,
}

impl FakeTokenValidator {
    fn accepting(valid: bool) -> Self {
        Self {
            valid,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TokenValidator for FakeTokenValidator {
    async fn is_valid(&self, _guild_id: Snowflake, _token: &str) -> RepoResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.valid)
    }
}

#[derive(Default)]
struct RecordingRoleGateway {
    removals: Mutex<Vec<(Snowflake, Snowflake, Snowflake)>>,
    fail: bool,
}

impl RecordingRoleGateway {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn removal_count(&self) -> usize {
        self.removals.lock().unwrap().len()
    }
}

#[async_trait]
impl RoleGateway for RecordingRoleGateway {
    async fn remove_role(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
        role_id: Snowflake,
    ) -> Result<(), DomainError> {
        self.removals
            .lock()
            .unwrap()
            .push((guild_id, member_id, role_id));
        if self.fail {
            return Err(DomainError::GatewayError("503 from upstream".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
struct FakeDirectory {
    calls: AtomicUsize,
}

#[async_trait]
impl GuildDirectory for FakeDirectory {
    async fn guild_profile(&self, guild_id: Snowflake) -> Result<GuildProfile, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GuildProfile {
            id: guild_id,
            name: "Starknet Builders".to_string(),
            icon: None,
        })
    }
}

struct Fixture {
    links: Arc<FakeLinkRepo>,
    guilds: Arc<FakeGuildRepo>,
    tokens: Arc<FakeTokenValidator>,
    roles: Arc<RecordingRoleGateway>,
    directory: Arc<FakeDirectory>,
    ctx: ServiceContext,
}

fn fixture(
    links: FakeLinkRepo,
    guilds: FakeGuildRepo,
    tokens: FakeTokenValidator,
    roles: RecordingRoleGateway,
) -> Fixture {
    let links = Arc::new(links);
    let guilds = Arc::new(guilds);
    let tokens = Arc::new(tokens);
    let roles = Arc::new(roles);
    let directory = Arc::new(FakeDirectory::default());

    let ctx = ServiceContextBuilder::new()
        .link_repo(links.clone())
        .guild_repo(guilds.clone())
        .token_validator(tokens.clone())
        .role_gateway(roles.clone())
        .guild_directory(directory.clone())
        .build()
        .unwrap();

    Fixture {
        links,
        guilds,
        tokens,
        roles,
        directory,
        ctx,
    }
}

fn linked_fixture() -> Fixture {
    let links = FakeLinkRepo::with_links(vec![link(GUILD, MEMBER, "starknet")]);
    links.set_config(GuildConfig::new(GUILD, ROLE));
    fixture(
        links,
        FakeGuildRepo::with_config(GuildConfig::new(GUILD, ROLE)),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    )
}

// ============================================================================
// Disconnect flow
// ============================================================================

// Scenario A: linked member runs disconnect and confirms
#[tokio::test]
async fn disconnect_happy_path_tombstones_and_removes_role() {
    let f = linked_fixture();
    let service = DisconnectService::new(&f.ctx);

    let entry = service.begin(Some(MEMBER), Some(GUILD)).await.unwrap();
    let DisconnectEntry::Confirm(prompt) = entry else {
        panic!("expected confirmation prompt");
    };
    assert_eq!(prompt.action_id, DISCONNECT_CONFIRM_ID);

    let outcome = service.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();
    match outcome {
        DisconnectConfirm::Disconnected { content, revoked } => {
            assert_eq!(content, "Disconnected!");
            assert_eq!(revoked, 1);
        }
        other => panic!("expected Disconnected, got {other:?}"),
    }

    assert_eq!(f.links.active_count(GUILD, MEMBER), 0);
    // Tombstoned, not deleted
    assert_eq!(f.links.stored_count(), 1);
    assert_eq!(
        f.roles.removals.lock().unwrap().as_slice(),
        &[(GUILD, MEMBER, ROLE)]
    );
}

// Scenario B: member without a link is denied without any mutation
#[tokio::test]
async fn disconnect_entry_denies_when_no_active_link() {
    let f = fixture(
        FakeLinkRepo::default(),
        FakeGuildRepo::default(),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = DisconnectService::new(&f.ctx);

    let entry = service.begin(Some(MEMBER), Some(GUILD)).await.unwrap();
    match entry {
        DisconnectEntry::NoLink { content } => {
            assert_eq!(
                content,
                "You haven't linked any Starknet wallet to this Discord server."
            );
        }
        other => panic!("expected NoLink, got {other:?}"),
    }
    assert_eq!(f.links.soft_remove_calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.roles.removal_count(), 0);
}

#[tokio::test]
async fn disconnect_entry_only_presents_prompt_without_mutation() {
    let f = linked_fixture();
    let service = DisconnectService::new(&f.ctx);

    let _ = service.begin(Some(MEMBER), Some(GUILD)).await.unwrap();

    assert_eq!(f.links.active_count(GUILD, MEMBER), 1);
    assert_eq!(f.links.soft_remove_calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.roles.removal_count(), 0);
}

#[tokio::test]
async fn disconnect_ignores_missing_identifiers() {
    let f = linked_fixture();
    let service = DisconnectService::new(&f.ctx);

    assert_eq!(
        service.begin(None, Some(GUILD)).await.unwrap(),
        DisconnectEntry::Ignored
    );
    assert_eq!(
        service.begin(Some(MEMBER), None).await.unwrap(),
        DisconnectEntry::Ignored
    );
    assert_eq!(
        service.confirm(None, None).await.unwrap(),
        DisconnectConfirm::Ignored
    );
    assert_eq!(f.links.active_count(GUILD, MEMBER), 1);
}

// Scenario C: confirmation raced against an earlier disconnect
#[tokio::test]
async fn disconnect_confirm_is_noop_when_already_unlinked() {
    let f = linked_fixture();
    let service = DisconnectService::new(&f.ctx);

    let first = service.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();
    assert!(matches!(first, DisconnectConfirm::Disconnected { .. }));

    let second = service.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();
    assert_eq!(second, DisconnectConfirm::AlreadyUnlinked);

    // The loser of the race mutates nothing further
    assert_eq!(f.links.soft_remove_calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.roles.removal_count(), 1);
}

// Scenario D: role removal failure does not gate the acknowledgment
#[tokio::test]
async fn disconnect_succeeds_when_role_removal_fails() {
    let links = FakeLinkRepo::with_links(vec![link(GUILD, MEMBER, "starknet")]);
    links.set_config(GuildConfig::new(GUILD, ROLE));
    let f = fixture(
        links,
        FakeGuildRepo::default(),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::failing(),
    );
    let service = DisconnectService::new(&f.ctx);

    let outcome = service.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();
    assert!(matches!(outcome, DisconnectConfirm::Disconnected { .. }));

    // The link is tombstoned even though the gateway rejected the removal
    assert_eq!(f.links.active_count(GUILD, MEMBER), 0);
    assert_eq!(f.roles.removal_count(), 1);
}

#[tokio::test]
async fn disconnect_confirm_processes_every_returned_link() {
    // A loose query may return several rows; all of them are handled
    let links = FakeLinkRepo::with_links(vec![
        link(GUILD, MEMBER, "starknet"),
        link(GUILD, MEMBER, "ethereum"),
    ]);
    links.set_config(GuildConfig::new(GUILD, ROLE));
    let f = fixture(
        links,
        FakeGuildRepo::default(),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = DisconnectService::new(&f.ctx);

    let outcome = service.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();
    match outcome {
        DisconnectConfirm::Disconnected { revoked, .. } => assert_eq!(revoked, 2),
        other => panic!("expected Disconnected, got {other:?}"),
    }
    assert_eq!(f.links.active_count(GUILD, MEMBER), 0);
    assert_eq!(f.roles.removal_count(), 2);
}

#[tokio::test]
async fn disconnect_leaves_other_members_untouched() {
    let other_member = Snowflake::new(2_002);
    let links = FakeLinkRepo::with_links(vec![
        link(GUILD, MEMBER, "starknet"),
        link(GUILD, other_member, "starknet"),
    ]);
    links.set_config(GuildConfig::new(GUILD, ROLE));
    let f = fixture(
        links,
        FakeGuildRepo::default(),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = DisconnectService::new(&f.ctx);

    service.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();

    assert_eq!(f.links.active_count(GUILD, MEMBER), 0);
    assert_eq!(f.links.active_count(GUILD, other_member), 1);
}

// ============================================================================
// Analytics flow
// ============================================================================

// Scenario E: valid token renders the distribution
#[tokio::test]
async fn analytics_reports_distribution_for_valid_token() {
    let links = FakeLinkRepo::with_links(vec![
        link(GUILD, MEMBER, "starknet"),
        link(GUILD, Snowflake::new(2_002), "starknet"),
        link(GUILD, Snowflake::new(2_003), "ethereum"),
    ]);
    let f = fixture(
        links,
        FakeGuildRepo::with_config(GuildConfig::new(GUILD, ROLE)),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = AnalyticsService::new(&f.ctx);

    let outcome = service.report(GUILD, "tok-123").await.unwrap();
    let AnalyticsOutcome::Report(report) = outcome else {
        panic!("expected report");
    };

    assert_eq!(report.guild_name, "Starknet Builders");
    assert_eq!(report.distribution.total(), 3);
    assert_eq!(
        report.distribution.display_counts(),
        vec![("Ethereum".to_string(), 1), ("Starknet".to_string(), 2)]
    );
}

#[tokio::test]
async fn analytics_rejects_invalid_token_before_any_lookup() {
    let f = fixture(
        FakeLinkRepo::with_links(vec![link(GUILD, MEMBER, "starknet")]),
        FakeGuildRepo::with_config(GuildConfig::new(GUILD, ROLE)),
        FakeTokenValidator::accepting(false),
        RecordingRoleGateway::default(),
    );
    let service = AnalyticsService::new(&f.ctx);

    let outcome = service.report(GUILD, "expired").await.unwrap();
    assert_eq!(outcome, AnalyticsOutcome::TokenExpired);

    // Fail-fast: no guild, directory, or link lookup leaks existence
    assert_eq!(f.tokens.calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.guilds.calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.directory.calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.links.find_by_guild_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn analytics_reports_unknown_guild_after_valid_token() {
    let f = fixture(
        FakeLinkRepo::default(),
        FakeGuildRepo::default(),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = AnalyticsService::new(&f.ctx);

    let outcome = service.report(GUILD, "tok-123").await.unwrap();
    assert_eq!(outcome, AnalyticsOutcome::GuildNotFound);
    assert_eq!(f.directory.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn analytics_empty_guild_yields_empty_distribution() {
    let f = fixture(
        FakeLinkRepo::default(),
        FakeGuildRepo::with_config(GuildConfig::new(GUILD, ROLE)),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = AnalyticsService::new(&f.ctx);

    let outcome = service.report(GUILD, "tok-123").await.unwrap();
    let AnalyticsOutcome::Report(report) = outcome else {
        panic!("expected report");
    };
    assert!(report.distribution.is_empty());
}

#[tokio::test]
async fn analytics_counts_tombstoned_rows() {
    // Disconnected members remain in the aggregate; the guild scan applies
    // no lifecycle filter.
    let mut removed = link(GUILD, MEMBER, "starknet");
    removed.soft_remove();
    let links = FakeLinkRepo::with_links(vec![removed, link(GUILD, Snowflake::new(2_002), "starknet")]);
    let f = fixture(
        links,
        FakeGuildRepo::with_config(GuildConfig::new(GUILD, ROLE)),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = AnalyticsService::new(&f.ctx);

    let outcome = service.report(GUILD, "tok-123").await.unwrap();
    let AnalyticsOutcome::Report(report) = outcome else {
        panic!("expected report");
    };
    assert_eq!(report.distribution.count(&Network::new("starknet")), 2);
}

#[tokio::test]
async fn analytics_distribution_is_computed_fresh_per_request() {
    let f = linked_fixture();
    let analytics = AnalyticsService::new(&f.ctx);
    let disconnect = DisconnectService::new(&f.ctx);

    let before = analytics.report(GUILD, "tok-123").await.unwrap();
    let AnalyticsOutcome::Report(before) = before else {
        panic!("expected report");
    };
    assert_eq!(before.distribution.total(), 1);

    disconnect.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();

    // Tombstoned row still counted, and the second read hits storage again
    let after = analytics.report(GUILD, "tok-123").await.unwrap();
    let AnalyticsOutcome::Report(after) = after else {
        panic!("expected report");
    };
    assert_eq!(after.distribution.total(), 1);
    assert_eq!(f.links.find_by_guild_calls.load(Ordering::SeqCst), 2);
}

// Links created at different times keep their timestamps distinct after
// tombstoning; removal stamps only the removed rows.
#[tokio::test]
async fn soft_remove_timestamps_only_target_rows() {
    let kept = link(GUILD, Snowflake::new(2_002), "starknet");
    let kept_updated = kept.updated_at;
    let target = link(GUILD, MEMBER, "starknet");
    let links = FakeLinkRepo::with_links(vec![target, kept]);
    links.set_config(GuildConfig::new(GUILD, ROLE));
    let f = fixture(
        links,
        FakeGuildRepo::default(),
        FakeTokenValidator::accepting(true),
        RecordingRoleGateway::default(),
    );
    let service = DisconnectService::new(&f.ctx);

    let before = Utc::now();
    service.confirm(Some(MEMBER), Some(GUILD)).await.unwrap();

    let stored = f.links.links.lock().unwrap().clone();
    for l in stored {
        if l.member_id == MEMBER {
            assert!(l.removed_at.unwrap() >= before);
        } else {
            assert!(l.is_active());
            assert_eq!(l.updated_at, kept_updated);
        }
    }
}
