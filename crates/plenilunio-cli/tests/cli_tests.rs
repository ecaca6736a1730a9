use plenilunio_testing::fixtures;
use plenilunio_testing::{StubResponse, StubServer, TestWorld};
use predicates::prelude::*;
use serde_json::Value;

fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[test]
fn test_list_sample_catalog() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["list"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Creciente"));
    assert!(stdout.contains("Aguas Altas"));
    assert!(stdout.contains("Llena"));
}

#[test]
fn test_list_bundled_catalog_json() {
    let world = TestWorld::new();

    let result = world.run(&["list", "--format", "json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    let seasons = json["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), 8);
    assert_eq!(seasons[0]["id"], "1");
    assert_eq!(seasons[7]["id"], "8");
}

#[test]
fn test_show_offline_uses_static_climate() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run(&["show", "2", "--offline", "--format", "json"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["name"], "Aguas Altas");
    assert_eq!(json["climate"]["source"], "static");
    assert_eq!(json["climate"]["precipitation"], "Muy alta");
}

#[test]
fn test_show_html_fills_header_slots() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run(&["show", "1", "--offline", "--format", "html"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains(r#"<h2 id="season-name">Creciente</h2>"#));
    assert!(stdout.contains(r#"<p id="season-months">Jan–Feb</p>"#));
    assert!(stdout.contains(r#"data-climate="static""#));
}

#[test]
fn test_show_unknown_season_fails() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["show", "42", "--offline"]).unwrap();

    assert!(!result.success());
    assert!(
        predicate::str::contains("Error: Season '42' not found").eval(result.stderr()),
        "stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_unreachable_climate_service_falls_back() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["show", "1", "--format", "json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json().unwrap()["climate"]["source"], "static");
}

#[test]
fn test_missing_catalog_shows_error_and_exits() {
    let world = TestWorld::new()
        .with_config(|config| config.catalog = "/nonexistent/plenilunio/seasons.json".to_string());

    let result = world.run(&["run"]).unwrap();

    assert!(!result.success());
    assert!(result.stdout().contains("❌ Error al cargar el calendario"));
    assert!(
        predicate::str::contains("Error: Failed to load season catalog").eval(result.stderr()),
        "stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_run_reads_selections_from_stdin() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_with_stdin(&["run", "--format", "json"], "2\nbogus input\n42\nquit\n3\n")
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let events = json_lines(result.stdout());
    assert_eq!(events[0]["event"], "ready");

    let selected: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "selected")
        .map(|e| e["season_id"].as_str().unwrap())
        .collect();
    assert_eq!(selected, vec!["1", "2"]);

    let last_season = events
        .iter()
        .rev()
        .find(|e| e["event"] == "season")
        .unwrap();
    assert_eq!(last_season["season"]["name"], "Aguas Altas");
    assert_eq!(last_season["season"]["climate"]["source"], "static");
}

#[test]
fn test_run_default_command_text() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_with_stdin(&[], "").unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Calendario Amazónico"));
    assert!(stdout.contains("Despertando la API del Amazonas..."));
    assert!(stdout.contains("[1]"));
    assert!(stdout.contains("Creciente  Jan–Feb"));
}

#[test]
fn test_catalog_flag_overrides_config() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run(&["--catalog", "bundled", "list", "--format", "json"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json().unwrap()["seasons"].as_array().unwrap().len(), 8);
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run(&["--log-level", "debug", "show", "1", "--offline", "--format", "json"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.json().is_ok());
    assert!(result.stderr().contains("season catalog loaded"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_with_live_climate() {
    let server = StubServer::start(StubResponse::ok(fixtures::sample_climate_body("1")))
        .await
        .unwrap();
    let world = TestWorld::new()
        .with_sample_catalog()
        .with_api_base_url(server.base_url());

    let result = tokio::task::spawn_blocking(move || world.run(&["show", "1", "--format", "json"]))
        .await
        .unwrap()
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["climate"]["source"], "live");
    assert_eq!(json["climate"]["cycle"], "Seca");
    assert_eq!(json["climate"]["location"], "Leticia, Amazonas - Colombia");
    assert_eq!(server.paths(), vec!["/api/v1/climate/1"]);
}
