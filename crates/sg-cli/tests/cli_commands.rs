//! End-to-end tests for the `sg` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn sg() -> Command {
    let mut cmd = Command::cargo_bin("sg").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("SG_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_with_seed() {
    sg().args(["roll", "3d6+2", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3d6+2").and(predicate::str::contains("seed=42")));
}

#[test]
fn roll_is_reproducible() {
    let first = sg()
        .args(["roll", "4d6+1d8", "--seed", "9", "--times", "3"])
        .output()
        .unwrap();
    let second = sg()
        .args(["roll", "4d6+1d8", "--seed", "9", "--times", "3"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_many_with_advantage() {
    sg().args(["roll", "1d20", "--seed", "1", "--times", "5", "--mode", "advantage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("advantage").and(predicate::str::contains("5 rolls")));
}

#[test]
fn roll_rejects_unknown_mode() {
    sg().args(["roll", "1d6", "--mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown roll mode"));
}

#[test]
fn roll_rejects_bad_notation() {
    sg().args(["roll", "0d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("at least 1")));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_shows_min_max_average() {
    sg().args(["stats", "2d6+1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Average")
                .and(predicate::str::contains("13"))
                .and(predicate::str::contains("8")),
        );
}

#[test]
fn stats_distribution() {
    sg().args(["stats", "2d6", "--distribution"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16.67%").and(predicate::str::contains("2.78%")));
}

#[test]
fn stats_at_least() {
    sg().args(["stats", "1d20", "--at-least", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.00%"));
}

#[test]
fn stats_points_at_bad_input() {
    sg().args(["stats", "d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing its count"));
}

#[test]
fn stats_refuses_huge_distributions() {
    sg().args(["stats", "100d100", "--distribution"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many possible totals"));
}

#[test]
fn verbose_logs_to_stderr() {
    sg().args(["-v", "stats", "100d100", "--distribution"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("distribution too wide"));
}

// ---------------------------------------------------------------------------
// compare / suggest / crit
// ---------------------------------------------------------------------------

#[test]
fn compare_reports_strictly_better() {
    sg().args(["compare", "1d6", "1d8+1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strictly better"));
}

#[test]
fn suggest_medium() {
    sg().args(["suggest", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d6"));
}

#[test]
fn suggest_high_variance() {
    sg().args(["suggest", "10.5", "--variance", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20"));
}

#[test]
fn suggest_rejects_unknown_variance() {
    sg().args(["suggest", "7", "--variance", "extreme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variance"));
}

#[test]
fn crit_doubles_by_default() {
    sg().args(["crit", "2d6+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2d6+3)×2").and(predicate::str::contains("20")));
}

#[test]
fn crit_dice_only() {
    sg().args(["crit", "2d6+3", "--dice-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4d6+3").and(predicate::str::contains("17")));
}

#[test]
fn crit_with_extra_dice() {
    sg().args(["crit", "1d8+2", "--extra", "1d6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1d8+2)×2+1d6"));
}

#[test]
fn crit_dice_only_caps_dice() {
    sg().args(["crit", "15d6", "--dice-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20d6"));
    sg().args(["crit", "15d6", "--dice-only", "--max-dice", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30d6"));
}

#[test]
fn suggest_out_of_range_average_fails_cleanly() {
    sg().args(["suggest", "1e19"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no medium-variance notation"));
    sg().args(["suggest", "--", "-1e300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// chain / dot
// ---------------------------------------------------------------------------

#[test]
fn chain_percentage_falloff() {
    sg().args(["chain", "8d6+4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("6d6+3")
                .and(predicate::str::contains("5d6+2"))
                .and(predicate::str::contains("75.5")),
        );
}

#[test]
fn chain_dice_falloff_with_minimum() {
    sg().args([
        "chain", "4d6", "--targets", "4", "--falloff", "dice", "--minimum", "10",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("3d6").and(predicate::str::contains("2d6").not()));
}

#[test]
fn chain_rejects_unknown_falloff() {
    sg().args(["chain", "4d6", "--falloff", "halving"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown falloff"));
}

#[test]
fn dot_increasing_schedule() {
    sg().args(["dot", "1d6", "--ticks", "4", "--scaling", "increasing"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("×2.5")
                .and(predicate::str::contains("Total damage: 24.5")),
        );
}

#[test]
fn dot_healing_frontloaded() {
    sg().args([
        "dot", "2d4", "--healing", "--scaling", "frontloaded", "--initial", "2", "--final", "0",
        "--ticks", "5",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("Healing over time")
            .and(predicate::str::contains("Total healing: 25")),
    );
}

#[test]
fn dot_rejects_unknown_scaling() {
    sg().args(["dot", "1d6", "--scaling", "wavy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scaling"));
}

// ---------------------------------------------------------------------------
// catalogs
// ---------------------------------------------------------------------------

#[test]
fn shapes_lists_every_shape() {
    let mut assert = sg().arg("shapes").assert().success();
    for id in [
        "circle", "square", "cone", "line", "cube", "sphere", "cylinder", "wall",
    ] {
        assert = assert.stdout(predicate::str::contains(id));
    }
    assert.stdout(predicate::str::contains("radius, height"));
}

#[test]
fn targeting_lists_types() {
    sg().arg("targeting")
        .assert()
        .success()
        .stdout(predicate::str::contains("Smart Targeting").and(predicate::str::contains("-1")));
}

#[test]
fn targeting_details() {
    sg().args(["targeting", "chain"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Chain Effect")
                .and(predicate::str::contains("+2 AP"))
                .and(predicate::str::contains("Chain Lightning")),
        );
}

#[test]
fn targeting_unknown_id() {
    sg().args(["targeting", "aura"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown targeting type: aura"));
}

// ---------------------------------------------------------------------------
// geometry
// ---------------------------------------------------------------------------

#[test]
fn coverage_default_circle() {
    sg().args(["coverage", "circle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1256.64").and(predicate::str::contains("51")));
}

#[test]
fn coverage_volume() {
    sg().args(["coverage", "cube", "--size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Volume: 1000 cu ft").and(predicate::str::contains("8")));
}

#[test]
fn coverage_unknown_shape() {
    sg().args(["coverage", "hexagon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shape: hexagon"));
}

#[test]
fn targets_area_circle() {
    sg().args(["targets", "area", "--shape", "circle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(": 11"));
}

#[test]
fn targets_area_without_shape_is_variable() {
    sg().args(["targets", "area"])
        .assert()
        .success()
        .stdout(predicate::str::contains("variable"));
}

#[test]
fn targets_chain_count() {
    sg().args(["targets", "chain", "--chain-count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(": 5"));
}

#[test]
fn overlay_small_circle() {
    sg().args(["overlay", "circle", "--radius", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 cells affected").and(predicate::str::contains("@")));
}

#[test]
fn overlay_rejects_off_grid_anchor() {
    sg().args(["overlay", "circle", "-x", "30", "-y", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("off the 21×21 grid"));
}
