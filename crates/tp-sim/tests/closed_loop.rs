//! Integration test: reference heater scenario end to end.
//!
//! dt = 0.1, 1000 steps, setpoint 25000, ambient/initial 20, gains 0.8/0.05/0.02.
//! The setpoint is unreachable, so the heater stays saturated and the plant
//! climbs toward its open-loop ceiling `ambient + heating_gain / cooling`.

use tp_sim::{AppendOutcome, MemorySink, RecordSink, SimConfig, SimRecord, Simulation, run_sim};

#[test]
fn reference_scenario_emits_every_step_in_order() {
    let cfg = SimConfig::default();
    let mut sim = Simulation::new(&cfg).unwrap();
    let mut sink = MemorySink::new();

    let report = run_sim(&mut sim, &mut sink);
    let records = sink.records();

    assert_eq!(records.len(), 1000);
    assert_eq!(report.steps, 1000);
    assert_eq!(report.written, 1000);
    assert_eq!(report.dropped, 0);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.step_index, i);
        assert_eq!(r.setpoint, 25_000.0);
    }
}

#[test]
fn reference_scenario_saturates_and_heats_monotonically() {
    let cfg = SimConfig::default();
    let mut sim = Simulation::new(&cfg).unwrap();
    let mut sink = MemorySink::new();
    run_sim(&mut sim, &mut sink);
    let records = sink.records();

    assert!(
        records
            .iter()
            .all(|r| (0.0..=1.0).contains(&r.control_output))
    );
    assert!(records.iter().all(|r| r.control_output == 1.0));

    let mut previous = cfg.initial_temperature;
    for r in records {
        assert!(
            r.temperature > previous,
            "temperature fell at step {}",
            r.step_index
        );
        assert!(r.temperature < r.setpoint);
        previous = r.temperature;
    }

    // open-loop ceiling is 20 + 1.0 / 0.1
    let last = records.last().unwrap();
    assert!(last.temperature < 30.0);
    assert!(last.temperature > 29.9);
}

#[test]
fn reference_scenario_winds_up_integral() {
    let mut sim = Simulation::new(&SimConfig::default()).unwrap();
    let mut sink = MemorySink::new();
    run_sim(&mut sim, &mut sink);

    // every step adds roughly 24_975 * 0.1 while the output stays clamped
    assert!(sim.controller().state().integral > 2.4e6);
}

/// Sink that refuses every third record, as if the target were briefly unavailable.
struct FlakySink {
    kept: Vec<SimRecord>,
    calls: usize,
}

impl RecordSink for FlakySink {
    fn append(&mut self, record: &SimRecord) -> AppendOutcome {
        self.calls += 1;
        if record.step_index % 3 == 2 {
            return AppendOutcome::Dropped;
        }
        self.kept.push(*record);
        AppendOutcome::Written
    }
}

#[test]
fn dropped_records_do_not_stop_the_loop() {
    let cfg = SimConfig {
        steps: 9,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(&cfg).unwrap();
    let mut sink = FlakySink {
        kept: Vec::new(),
        calls: 0,
    };

    let report = run_sim(&mut sim, &mut sink);

    assert_eq!(sink.calls, 9);
    assert_eq!(report.written, 6);
    assert_eq!(report.dropped, 3);
    let kept: Vec<usize> = sink.kept.iter().map(|r| r.step_index).collect();
    assert_eq!(kept, vec![0, 1, 3, 4, 6, 7]);
}

#[test]
fn dropped_records_do_not_change_the_trajectory() {
    let cfg = SimConfig {
        steps: 30,
        setpoint: 25.0,
        ..SimConfig::default()
    };

    let mut full = MemorySink::new();
    let full_report = run_sim(&mut Simulation::new(&cfg).unwrap(), &mut full);

    let mut flaky = FlakySink {
        kept: Vec::new(),
        calls: 0,
    };
    let flaky_report = run_sim(&mut Simulation::new(&cfg).unwrap(), &mut flaky);

    assert_eq!(full_report.final_temperature, flaky_report.final_temperature);
    for r in &flaky.kept {
        assert_eq!(*r, full.records()[r.step_index]);
    }
}
