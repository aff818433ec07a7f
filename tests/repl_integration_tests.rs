//! Integration Tests for the REPL
//!
//! Drives full command sessions. API responses are pre-seeded into the
//! cache under their request URLs and the client points at a closed local
//! port, so nothing here reaches the network.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tokio::io::BufReader;

use pokedex::{repl, Cache, PokeApiClient, Session};

const BASE_URL: &str = "http://127.0.0.1:9/api/v2";
const PAGE_SIZE: u32 = 2;

// == Helper Functions ==

fn test_client() -> PokeApiClient {
    let cache = Arc::new(Cache::new(Duration::from_secs(60)));
    PokeApiClient::new(BASE_URL, cache)
}

fn test_session(client: PokeApiClient) -> Session {
    Session::with_rng(client, PAGE_SIZE, StdRng::seed_from_u64(7))
}

async fn seed(client: &PokeApiClient, url: String, body: serde_json::Value) {
    client.cache().add(url, body.to_string()).await;
}

/// Seeds a two-page location area listing.
async fn seed_pages(client: &PokeApiClient) {
    let first = client.location_areas_url(0, PAGE_SIZE);
    let second = client.location_areas_url(PAGE_SIZE, PAGE_SIZE);

    seed(
        client,
        first.clone(),
        json!({
            "count": 3,
            "next": second,
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": ""},
                {"name": "eterna-city-area", "url": ""}
            ]
        }),
    )
    .await;
    seed(
        client,
        second,
        json!({
            "count": 3,
            "next": null,
            "previous": first,
            "results": [{"name": "pastoria-city-area", "url": ""}]
        }),
    )
    .await;
}

async fn seed_pokemon(client: &PokeApiClient, name: &str, base_experience: u32) {
    seed(
        client,
        client.pokemon_url(name),
        json!({
            "name": name,
            "height": 3,
            "weight": 18,
            "base_experience": base_experience,
            "stats": [
                {"base_stat": 40, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 45, "stat": {"name": "attack", "url": ""}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "normal", "url": ""}},
                {"slot": 2, "type": {"name": "flying", "url": ""}}
            ]
        }),
    )
    .await;
}

async fn run_script(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    repl::run(session, script.as_bytes(), &mut out)
        .await
        .expect("REPL should not fail on in-memory I/O");
    String::from_utf8(out).unwrap()
}

// == Basic Commands ==

#[tokio::test]
async fn test_help_lists_every_command() {
    let mut session = test_session(test_client());

    let output = run_script(&mut session, "help\n").await;

    assert!(output.starts_with(repl::PROMPT));
    assert!(output.contains("Available commands:"));
    for (name, description) in repl::COMMANDS {
        assert!(output.contains(&format!("- {}: {}", name, description)));
    }
}

#[tokio::test]
async fn test_exit_stops_reading() {
    let mut session = test_session(test_client());

    let output = run_script(&mut session, "exit\nhelp\n").await;

    assert!(output.contains("Closing the Pokedex... Goodbye!"));
    assert!(!output.contains("Available commands:"));
}

#[tokio::test]
async fn test_blank_and_unknown_input() {
    let mut session = test_session(test_client());

    let output = run_script(&mut session, "   \nfly\n").await;

    assert!(output.contains("No command entered."));
    assert!(output.contains("Unknown command. Type 'help' to see available commands."));
}

#[tokio::test]
async fn test_input_is_case_insensitive() {
    let mut session = test_session(test_client());

    let output = run_script(&mut session, "  HELP  \n").await;

    assert!(output.contains("Available commands:"));
}

// == Pagination ==

#[tokio::test]
async fn test_map_pages_forward_and_back() {
    let client = test_client();
    seed_pages(&client).await;
    let mut session = test_session(client.clone());

    let output = run_script(&mut session, "map\nmap\nmap\nmapb\n").await;

    let first_page = "- canalave-city-area\n- eterna-city-area\n";
    assert_eq!(output.matches(first_page).count(), 2, "output:\n{}", output);
    assert!(output.contains("- pastoria-city-area\nNo more pages available."));
    assert!(output.contains("No more pages to fetch."));
    assert!(output.contains("Type 'map' to see the next page of locations."));

    // Every page came from the seeded cache.
    let stats = client.cache().stats().await;
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.misses, 0);
}

#[tokio::test]
async fn test_mapb_on_first_page() {
    let client = test_client();
    seed_pages(&client).await;
    let mut session = test_session(client);

    let output = run_script(&mut session, "mapb\nmap\nmapb\n").await;

    assert!(output.contains("No previous pages to fetch."));
    assert!(session.previous_page().is_none());
    assert!(session.next_page().unwrap().contains("offset=2"));
}

// == Explore ==

#[tokio::test]
async fn test_explore_lists_encounters() {
    let client = test_client();
    seed(
        &client,
        client.location_area_url("pastoria-city-area"),
        json!({
            "name": "pastoria-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": ""}},
                {"pokemon": {"name": "magikarp", "url": ""}}
            ]
        }),
    )
    .await;
    let mut session = test_session(client);

    let output = run_script(&mut session, "explore Pastoria-City-Area\n").await;

    assert!(output.contains("Pokemon encounters in pastoria-city-area:\n- tentacool\n- magikarp\n"));
}

#[tokio::test]
async fn test_explore_without_area() {
    let mut session = test_session(test_client());

    let output = run_script(&mut session, "explore\n").await;

    assert!(output.contains("Error: you must specify a location area to explore"));
}

#[tokio::test]
async fn test_fetch_failure_is_reported_and_loop_continues() {
    let mut session = test_session(test_client());

    let output = run_script(&mut session, "explore nowhere\nhelp\n").await;

    assert!(output.contains("Error: "));
    assert!(output.contains("Available commands:"));
}

// == Catch / Inspect / Pokedex ==

#[tokio::test]
async fn test_catch_inspect_and_list() {
    let client = test_client();
    seed_pokemon(&client, "pidgey", 0).await;
    let mut session = test_session(client);

    let output = run_script(&mut session, "catch pidgey\ninspect pidgey\npokedex\n").await;

    assert!(output.contains("Throwing a Pokeball at pidgey...\npidgey was caught!"));
    assert!(output.contains("Name: pidgey\nHeight: 3\nWeight: 18\n"));
    assert!(output.contains("Caught: "));
    assert!(output.contains("Stats:\n  -hp: 40\n  -attack: 45\n"));
    assert!(output.contains("Types:\n  - normal\n  - flying\n"));
    assert!(output.contains("Your Pokedex:\n  - pidgey\n"));
    assert_eq!(session.pokedex().len(), 1);
}

#[tokio::test]
async fn test_catch_can_fail() {
    let client = test_client();
    seed_pokemon(&client, "mewtwo", 340).await;
    let mut session = test_session(client);

    let output = run_script(&mut session, "catch mewtwo\ninspect mewtwo\npokedex\n").await;

    assert!(output.contains("mewtwo escaped!"));
    assert!(output.contains("You have not caught mewtwo yet."));
    assert!(output.contains("Your Pokedex is empty."));
    assert!(session.pokedex().is_empty());
}

#[tokio::test]
async fn test_catch_without_name() {
    let mut session = test_session(test_client());

    let output = run_script(&mut session, "catch\ninspect\n").await;

    assert!(output.contains("Error: you must specify a pokemon to catch"));
    assert!(output.contains("Error: you must specify a pokemon to inspect"));
}

// == Stdin Framing ==

#[tokio::test]
async fn test_commands_split_across_reads() {
    let client = test_client();
    seed_pokemon(&client, "abra", 0).await;
    let mut session = test_session(client);

    let stdin = tokio_test::io::Builder::new()
        .read(b"cat")
        .read(b"ch abra\npoke")
        .read(b"dex\n")
        .read(b"exit\n")
        .build();
    let mut out = Vec::new();

    repl::run(&mut session, BufReader::new(stdin), &mut out)
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("abra was caught!"));
    assert!(output.contains("Your Pokedex:\n  - abra\n"));
    assert!(output.ends_with("Closing the Pokedex... Goodbye!\n"));
}
