//! Integration tests for the modstat-bot crate.
//!
//! These run without a gateway connection: configuration and token loading
//! plus the cache-backed parts of the serenity gateway.

use modstat_bot::{required_intents, ModstatBot, SerenityGateway};
use modstat_commands::MessageSource;
use modstat_common::test_utils::init_test_logging;
use modstat_config::ConfigLoader;
use poise::serenity_prelude as serenity;
use std::fs;
use std::sync::Arc;

fn offline_gateway() -> SerenityGateway {
    SerenityGateway::new(
        Arc::new(serenity::Http::new("offline-token")),
        Arc::new(serenity::Cache::new()),
    )
}

#[test]
fn test_startup_inputs_from_disk() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("bot_token");
    fs::write(&token_file, "  abc.def.ghi  \nsecond line ignored\n").unwrap();

    let config_file = dir.path().join("modstat.toml");
    fs::write(
        &config_file,
        format!(
            "[discord]\ntoken_file = {:?}\n\n[graphs]\noutput_dir = {:?}\n",
            token_file,
            dir.path().join("graphs")
        ),
    )
    .unwrap();

    let config = ConfigLoader::new(&config_file).load().unwrap();
    assert_eq!(config.discord.command_prefix, "$");
    assert_eq!(config.discord.moderator_role, "Moderators");

    let token = ConfigLoader::load_token(&config).unwrap();
    assert_eq!(token, "abc.def.ghi");

    // Construction alone must not touch the network.
    let _bot = ModstatBot::new(config, token);
}

#[test]
fn test_intents_cover_message_commands() {
    let intents = required_intents();
    assert!(intents.contains(serenity::GatewayIntents::GUILD_MESSAGES));
    assert!(intents.contains(serenity::GatewayIntents::GUILDS));
}

#[test]
fn test_empty_cache_has_no_channels() {
    let gateway = offline_gateway();
    let channels = tokio_test::block_on(gateway.channels()).unwrap();
    assert!(channels.is_empty());
}

#[test]
fn test_member_lookup_outside_cached_guilds() {
    let gateway = offline_gateway();
    let lookup = gateway.find_member("/r/PUBATTLEGROUNDS", "someone");
    let member = tokio_test::block_on(lookup).unwrap();
    assert_eq!(member, None);
}
