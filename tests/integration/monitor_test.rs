use sensorwatch::core::config::{Identity, Thresholds};
use sensorwatch::core::dispatch::{AlertSender, DispatchOutcome, Dispatcher};
use sensorwatch::core::state_monitor::{keys, CheckKind, Sample, SharedMonitor, StateMonitor};
use sensorwatch::MonitorError;
use std::sync::{Arc, Mutex};

/// Records everything it is asked to send
struct RecordingSender {
    sent: Arc<Mutex<Vec<String>>>,
}

impl AlertSender for RecordingSender {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn has_channel(&self, _channel: &str) -> bool {
        true
    }

    fn send(&self, _channel: &str, text: &str) -> sensorwatch::Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Fails every delivery
struct BrokenSender;

impl AlertSender for BrokenSender {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn has_channel(&self, _channel: &str) -> bool {
        true
    }

    fn send(&self, _channel: &str, _text: &str) -> sensorwatch::Result<()> {
        Err(MonitorError::delivery("broken", "HTTP 503"))
    }
}

fn identity() -> Identity {
    Identity {
        name: Some("ttbd".to_string()),
        number: Some(4),
        site_description: Some("North ridge".to_string()),
    }
}

fn recording_monitor() -> (StateMonitor, Arc<Mutex<Vec<String>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = Dispatcher::with_sender(
        Box::new(RecordingSender {
            sent: Arc::clone(&sent),
        }),
        "testing",
    );
    (
        StateMonitor::with_dispatcher(Thresholds::default(), identity(), dispatcher),
        sent,
    )
}

fn healthy() -> Sample {
    Sample::new()
        .with(keys::LOAD_VOLTAGE, 12.5)
        .with(keys::LOAD_CURRENT, 2.0)
        .with(keys::PING, 0)
        .with(keys::BYTES_REMAINING, 500e9)
        .with(keys::LOW_VOLTAGE_DISCONNECT, 11.5)
        .with(keys::BATTERY_VOLTAGE, 13.1)
        .with(keys::LED_STATE, 1)
}

fn with(mut sample: Sample, key: &str, value: f64) -> Sample {
    sample.insert(key, value);
    sample
}

#[test]
fn test_power_sequence_fires_once() {
    let (mut monitor, sent) = recording_monitor();

    // 12.5 V x 2 A = 25 W, then 0.5 W
    for amps in [2.0, 2.0, 0.04, 0.04] {
        monitor.execute(with(healthy(), keys::LOAD_CURRENT, amps));
    }

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        "Message from sensor ttbd04 at North ridge\nPower has dropped from 25.00 to 0.50."
    );
}

#[test]
fn test_connectivity_debounce_through_monitor() {
    let (mut monitor, sent) = recording_monitor();

    let fired: Vec<bool> = [0.0, 1.0, 1.0, 1.0, 0.0]
        .iter()
        .map(|&ping| {
            monitor
                .evaluate(with(healthy(), keys::PING, ping))
                .fired(CheckKind::Connectivity)
        })
        .collect();

    assert_eq!(fired, vec![false, false, false, true, false]);
    assert_eq!(monitor.states().connectivity.failures(), 0);
    assert_eq!(sent.lock().unwrap().len(), 1);
    assert!(sent.lock().unwrap()[0].contains("3 consecutive pings failed"));
}

#[test]
fn test_long_outage_alerts_once() {
    let (mut monitor, sent) = recording_monitor();
    for _ in 0..6 {
        monitor.execute(with(healthy(), keys::PING, 1.0));
    }
    assert_eq!(sent.lock().unwrap().len(), 1);
    assert_eq!(monitor.states().connectivity.failures(), 6);
}

#[test]
fn test_storage_battery_and_fault_sequences() {
    let (mut monitor, _sent) = recording_monitor();

    let storage: Vec<bool> = [150e9, 150e9, 50e9, 50e9]
        .iter()
        .map(|&bytes| {
            monitor
                .evaluate(with(healthy(), keys::BYTES_REMAINING, bytes))
                .fired(CheckKind::Storage)
        })
        .collect();
    assert_eq!(storage, vec![false, false, true, false]);

    let (mut monitor, _sent) = recording_monitor();
    let battery: Vec<bool> = [11.0, 11.0, 10.0, 10.0]
        .iter()
        .map(|&volts| {
            let sample = with(
                with(healthy(), keys::LOW_VOLTAGE_DISCONNECT, 10.0),
                keys::BATTERY_VOLTAGE,
                volts,
            );
            monitor.evaluate(sample).fired(CheckKind::Battery)
        })
        .collect();
    assert_eq!(battery, vec![false, false, true, false]);

    let (mut monitor, _sent) = recording_monitor();
    let fault: Vec<bool> = [0.0, 0.0, 12.0, 12.0, 13.0]
        .iter()
        .map(|&state| {
            monitor
                .evaluate(with(healthy(), keys::LED_STATE, state))
                .fired(CheckKind::DeviceFault)
        })
        .collect();
    assert_eq!(fault, vec![false, false, true, false, true]);
}

#[test]
fn test_first_cycle_never_alerts() {
    let degraded = Sample::new()
        .with(keys::LOAD_VOLTAGE, 12.0)
        .with(keys::LOAD_CURRENT, 0.0)
        .with(keys::PING, 0)
        .with(keys::BYTES_REMAINING, 1e9)
        .with(keys::LOW_VOLTAGE_DISCONNECT, 11.5)
        .with(keys::BATTERY_VOLTAGE, 10.0)
        .with(keys::LED_STATE, 15);

    let (mut monitor, sent) = recording_monitor();
    let report = monitor.evaluate(degraded);
    assert!(report.alerts.is_empty());
    assert!(report.failures.is_empty());
    assert!(sent.lock().unwrap().is_empty());
}

#[test]
fn test_missing_reading_only_skips_its_check() {
    let (mut monitor, _sent) = recording_monitor();
    monitor.execute(with(healthy(), keys::LED_STATE, 0.0));

    let mut sample = Sample::new()
        .with(keys::LOAD_VOLTAGE, 12.5)
        .with(keys::PING, 0)
        .with(keys::LOW_VOLTAGE_DISCONNECT, 11.5)
        .with(keys::BATTERY_VOLTAGE, 13.1);
    sample.insert(keys::LED_STATE, 12.0);

    let report = monitor.evaluate(sample.clone());
    assert!(report.failed(CheckKind::Power));
    assert!(report.failed(CheckKind::Storage));
    assert!(report.fired(CheckKind::DeviceFault));
    assert_eq!(report.sample, sample);

    // The next cycle compares against the incomplete sample and still runs
    let report = monitor.evaluate(healthy());
    assert!(report.failed(CheckKind::Power));
    assert!(!report.failed(CheckKind::Connectivity));
}

#[test]
fn test_unavailable_readings_are_quiet() {
    let (mut monitor, sent) = recording_monitor();
    monitor.execute(healthy());

    let mut sample = healthy();
    for key in [
        keys::LOAD_VOLTAGE,
        keys::PING,
        keys::BYTES_REMAINING,
        keys::BATTERY_VOLTAGE,
        keys::LED_STATE,
    ] {
        sample.insert(key, "NA");
    }

    let report = monitor.evaluate(sample);
    assert!(report.alerts.is_empty());
    assert!(report.failures.is_empty());
    assert!(sent.lock().unwrap().is_empty());
}

#[test]
fn test_failing_backend_does_not_stop_cycles() {
    let dispatcher = Dispatcher::with_sender(Box::new(BrokenSender), "testing");
    let mut monitor = StateMonitor::with_dispatcher(Thresholds::default(), identity(), dispatcher);

    monitor.execute(healthy());
    let report = monitor.evaluate(with(healthy(), keys::LOAD_CURRENT, 0.0));
    assert_eq!(report.alerts.len(), 1);
    assert_eq!(report.alerts[0].outcome, DispatchOutcome::Failed);

    let report = monitor.evaluate(with(healthy(), keys::LED_STATE, 12.0));
    assert!(report.fired(CheckKind::DeviceFault));
    assert!(report.failures.is_empty());
    assert_eq!(monitor.cycles(), 3);
}

#[test]
fn test_shared_monitor_serializes_cycles() {
    let (monitor, _sent) = recording_monitor();
    let shared = SharedMonitor::new(monitor);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    shared.execute(with(healthy(), keys::PING, 1.0));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.cycles(), 100);
    let report = shared.evaluate(healthy());
    assert!(report.alerts.is_empty());
}
