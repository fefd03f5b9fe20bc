//! Host-side integration test: wires the task registry, delay scheduler and
//! buffered log sink together the way a firmware main loop would, on one
//! shared mock clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cooploop::core::log_buffer::LOG_BUFFER_SIZE;
use cooploop::core::logging::{BufferedLogSink, LogSink};
use cooploop::core::scheduler::{DelayConfig, DelayScheduler, TaskRegistry};
use cooploop::platform::{Clock, MockClock};

type WebLog = Rc<RefCell<BufferedLogSink<MockClock, LOG_BUFFER_SIZE>>>;

#[test]
fn firmware_style_control_loop() {
    let clock = MockClock::new();
    let registry = Rc::new(TaskRegistry::new());
    let web_log: WebLog = Rc::new(RefCell::new(BufferedLogSink::new(clock.clone())));

    // Critical task: keep servicing network requests, even during updates
    let http_requests = Rc::new(Cell::new(0u32));
    {
        let http_requests = Rc::clone(&http_requests);
        registry.register_critical(move || http_requests.set(http_requests.get() + 1));
    }

    // Non-critical task: refresh a display
    let display_refreshes = Rc::new(Cell::new(0u32));
    {
        let display_refreshes = Rc::clone(&display_refreshes);
        registry.register(move || display_refreshes.set(display_refreshes.get() + 1));
    }

    web_log.borrow_mut().append_line("boot complete");

    // Foreground: wait 2s between "sensor readings" without starving tasks
    let scheduler = DelayScheduler::new(DelayConfig::new(20).unwrap());
    scheduler.delay_with_background_tasks(&clock, &registry, 2_000);

    assert!(clock.now_ms() >= 2_000);
    assert_eq!(http_requests.get(), 100); // 2000ms / 20ms bucket
    assert_eq!(display_refreshes.get(), 100);

    // Sensor reading arrives in pieces, then completes as one line
    {
        let mut log = web_log.borrow_mut();
        log.append("T: 72F");
        log.append(" ");
        log.append_line("H: 40%");
    }

    // Firmware update begins: gate off non-critical work for its duration
    {
        let _update = registry.pause_scope();
        scheduler.delay_with_background_tasks(&clock, &registry, 100);
    }
    let display_before_resume = display_refreshes.get();
    assert_eq!(display_before_resume, 100); // display stayed gated
    assert!(http_requests.get() > 100); // requests kept flowing

    // Normal operation resumes
    scheduler.delay_with_background_tasks(&clock, &registry, 100);
    assert!(display_refreshes.get() > display_before_resume);

    // Presentation layer renders the log, oldest first, with relative ages
    let dump = web_log.borrow().get_all();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].ends_with(" ago]boot complete"));
    assert!(lines[1].ends_with(" ago]T: 72F H: 40%"));
    assert_eq!(web_log.borrow().len(), 2);
}

#[test]
fn background_task_can_log_during_a_delay() {
    let clock = MockClock::new();
    let registry = Rc::new(TaskRegistry::new());
    let web_log: WebLog = Rc::new(RefCell::new(BufferedLogSink::new(clock.clone())));

    // A background task that logs a heartbeat line on every pass
    {
        let web_log = Rc::clone(&web_log);
        registry.register(move || web_log.borrow_mut().append_line("heartbeat"));
    }

    let scheduler = DelayScheduler::default();
    scheduler.delay_with_background_tasks(&clock, &registry, 60);

    // 20ms buckets -> 3 passes before the request is satisfied
    assert_eq!(web_log.borrow().len(), 3);

    let entries: Vec<u64> = web_log
        .borrow()
        .buffer()
        .iter()
        .map(|e| e.timestamp_ms)
        .collect();
    assert_eq!(entries, [0, 20, 40]);
}

#[test]
fn delay_lower_bound_holds_with_a_slow_logging_task() {
    let clock = MockClock::new();
    let registry = Rc::new(TaskRegistry::new());

    // Task costs 15ms of simulated time per pass
    {
        let task_clock = clock.clone();
        registry.register(move || task_clock.advance(15));
    }

    let start = clock.now_ms();
    let scheduler = DelayScheduler::default();
    scheduler.delay_with_background_tasks(&clock, &registry, 500);

    let blocked = clock.elapsed_since(start);
    assert!(blocked >= 500);
    // Upper bound: request + one bucket + one pass
    assert!(blocked <= 500 + 20 + 15);
}
