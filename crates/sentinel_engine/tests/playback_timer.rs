use std::sync::{Arc, Mutex};
use std::time::Duration;

use sentinel_engine::{EngineEvent, EventSink, PlaybackTimer};
use tokio::runtime::Handle;

const DELAY: Duration = Duration::from_millis(800);

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn timer() -> (PlaybackTimer, Arc<TestSink>) {
    let sink = Arc::new(TestSink::default());
    (PlaybackTimer::new(Handle::current(), sink.clone()), sink)
}

#[tokio::test(start_paused = true)]
async fn fires_once_after_delay() {
    let (mut timer, sink) = timer();
    timer.arm(1, DELAY);
    assert_eq!(timer.pending_feed(), Some(1));

    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert!(sink.take().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(sink.take(), vec![EngineEvent::RevealDue { feed_id: 1 }]);

    tokio::time::sleep(DELAY * 3).await;
    assert!(sink.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancelled_tick_never_fires() {
    let (mut timer, sink) = timer();
    timer.arm(1, DELAY);
    timer.cancel();
    assert_eq!(timer.pending_feed(), None);

    tokio::time::sleep(DELAY * 2).await;
    assert!(sink.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rearming_supersedes_the_pending_tick() {
    let (mut timer, sink) = timer();
    timer.arm(1, DELAY);
    tokio::time::sleep(DELAY / 2).await;
    timer.arm(2, DELAY);
    assert_eq!(timer.pending_feed(), Some(2));

    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(sink.take(), vec![EngineEvent::RevealDue { feed_id: 2 }]);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_timer_cancels_it() {
    let (mut timer, sink) = timer();
    timer.arm(3, DELAY);
    drop(timer);

    tokio::time::sleep(DELAY * 2).await;
    assert!(sink.take().is_empty());
}
