use cucumber::{given, then, when, World};
use klib_core::Atomic;
use klib_sync::{dec_and_lock, LockState, Mutex, RwSemaphore, SpinLock, Untracked, SINGLE_DEPTH_NESTING};
use klib_test_framework::{race_dec_and_lock, violation_of, RaceOutcome};

#[derive(Debug, Default, World)]
pub struct LockWorld {
    untracked: bool,
    spin: SpinLock<LockState>,
    plain_spin: SpinLock<Untracked>,
    sem: RwSemaphore<LockState>,
    mutex: Mutex<LockState>,
    counter: Atomic,
    locked_calls: usize,
    violations: Vec<String>,
    race: Option<RaceOutcome>,
}

impl LockWorld {
    /// Run a lock operation, recording a violation instead of failing the step
    fn attempt(&mut self, f: impl FnOnce(&Self)) {
        let this = &*self;
        if let Some(message) = violation_of(|| f(this)) {
            self.violations.push(message);
        }
    }

    fn race(&self) -> RaceOutcome {
        self.race.expect("no race has run in this scenario")
    }
}

// Setup

#[given("a fresh spin lock")]
fn fresh_spin_lock(world: &mut LockWorld) {
    world.spin.init();
}

#[given("a spin lock that was never initialized")]
fn uninitialized_spin_lock(world: &mut LockWorld) {
    world.spin = SpinLock::unlocked();
    corrupt(&mut world.spin);
}

#[given("an untracked spin lock")]
fn untracked_spin_lock(world: &mut LockWorld) {
    world.untracked = true;
    world.plain_spin.init();
}

#[given("a fresh rw-semaphore")]
fn fresh_rwsem(world: &mut LockWorld) {
    world.sem.init();
}

#[given("a fresh mutex")]
fn fresh_mutex(world: &mut LockWorld) {
    world.mutex.init();
}

#[given(expr = "a reference counter of {int}")]
fn reference_counter(world: &mut LockWorld, start: i32) {
    world.counter.set(start);
}

/// Zero the tag of a tracked spin lock in place
fn corrupt(lock: &mut SpinLock<LockState>) {
    let words = lock as *mut SpinLock<LockState> as *mut [u32; 2];
    // SAFETY: SpinLock<LockState> is repr(C) { u32 tag, i32 count }
    unsafe {
        (*words)[0] = 0;
    }
}

// Spin lock

#[when("I acquire the spin lock")]
fn acquire_spin(world: &mut LockWorld) {
    world.attempt(|w| {
        if w.untracked {
            w.plain_spin.acquire()
        } else {
            w.spin.acquire()
        }
    });
}

#[when("I release the spin lock")]
fn release_spin(world: &mut LockWorld) {
    world.attempt(|w| {
        if w.untracked {
            w.plain_spin.release()
        } else {
            w.spin.release()
        }
    });
}

#[when(expr = "I acquire and release the spin lock {int} times")]
fn cycle_spin(world: &mut LockWorld, times: usize) {
    for _ in 0..times {
        world.attempt(|w| {
            let _guard = w.spin.guard();
        });
        assert_eq!(world.spin.count(), Some(0));
    }
}

#[when("I reinitialize the spin lock")]
fn reinit_spin(world: &mut LockWorld) {
    world.spin.init();
}

#[then(expr = "the spin lock count is {int}")]
fn spin_count(world: &mut LockWorld, count: i32) {
    assert_eq!(world.spin.count(), Some(count));
}

#[then("the spin lock reports no state")]
fn spin_no_state(world: &mut LockWorld) {
    assert!(!world.plain_spin.is_tracked());
    assert_eq!(world.plain_spin.count(), None);
    assert_eq!(world.plain_spin.tag(), None);
}

// Rw-semaphore

#[when(expr = "I take {int} read locks")]
fn take_reads(world: &mut LockWorld, n: usize) {
    for _ in 0..n {
        world.attempt(|w| w.sem.acquire_read());
    }
}

#[when(expr = "I release {int} read locks")]
fn release_reads(world: &mut LockWorld, n: usize) {
    for _ in 0..n {
        world.attempt(|w| w.sem.release_read());
    }
}

#[when("I take the write lock")]
fn take_write(world: &mut LockWorld) {
    world.attempt(|w| w.sem.acquire_write());
}

#[when("I take the nested write lock")]
fn take_write_nested(world: &mut LockWorld) {
    world.attempt(|w| w.sem.acquire_write_nested(SINGLE_DEPTH_NESTING));
}

#[when("I release the write lock")]
fn release_write(world: &mut LockWorld) {
    world.attempt(|w| w.sem.release_write());
}

#[then(expr = "the semaphore count is {int}")]
fn sem_count(world: &mut LockWorld, count: i32) {
    assert_eq!(world.sem.count(), Some(count));
}

// Mutex

#[when("I lock the mutex")]
fn lock_mutex(world: &mut LockWorld) {
    world.attempt(|w| w.mutex.lock());
}

#[when("I unlock the mutex")]
fn unlock_mutex(world: &mut LockWorld) {
    world.attempt(|w| w.mutex.unlock());
}

#[then(expr = "the mutex count is {int}")]
fn mutex_count(world: &mut LockWorld, count: i32) {
    assert_eq!(world.mutex.count(), Some(count));
}

#[then("the mutex count matches the semaphore count")]
fn mutex_matches_sem(world: &mut LockWorld) {
    assert_eq!(world.mutex.count(), world.sem.count());
}

// Decrement and lock

#[when(expr = "I call dec_and_lock {int} times")]
fn call_dec_and_lock(world: &mut LockWorld, times: usize) {
    world.locked_calls = 0;
    for _ in 0..times {
        let mut locked = false;
        world.attempt(|w| locked = dec_and_lock(&w.counter, &w.spin));
        if locked {
            world.locked_calls += 1;
        }
    }
}

#[then(expr = "exactly {int} calls returned locked")]
fn locked_calls(world: &mut LockWorld, expected: usize) {
    assert_eq!(world.locked_calls, expected);
}

#[then(expr = "the reference counter is {int}")]
fn counter_value(world: &mut LockWorld, expected: i32) {
    assert_eq!(world.counter.read(), expected);
}

#[when(expr = "{int} threads race dec_and_lock on a counter of {int}")]
fn race(world: &mut LockWorld, callers: usize, start: i32) {
    world.race = Some(race_dec_and_lock(start, callers));
}

#[then("exactly one thread won the race")]
fn one_winner(world: &mut LockWorld) {
    assert_eq!(world.race().winners, 1);
}

#[then(expr = "the race left the counter at {int}")]
fn race_counter(world: &mut LockWorld, expected: i32) {
    assert_eq!(world.race().remaining, expected);
}

#[then("the race left the spin lock free")]
fn race_lock_free(world: &mut LockWorld) {
    assert_eq!(world.race().lock_count, Some(0));
}

// Violations

#[then("no violation is reported")]
fn no_violation(world: &mut LockWorld) {
    assert!(world.violations.is_empty(), "unexpected: {:?}", world.violations);
}

#[then("an invariant violation is reported")]
fn violation_reported(world: &mut LockWorld) {
    assert!(!world.violations.is_empty(), "expected a lock invariant violation");
}

#[then(expr = "the violation mentions {string}")]
fn violation_mentions(world: &mut LockWorld, text: String) {
    assert!(
        world.violations.iter().any(|v| v.contains(&text)),
        "no violation mentions {text:?}: {:?}",
        world.violations
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    LockWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit(concat!(env!("CARGO_MANIFEST_DIR"), "/features"))
        .await;
}
