use std::{sync::Arc, thread};

use iconlookup::lookup::IconLookup;

mod common;

use common::FakeResolver;

const THREADS: usize = 20;
const LOOKUPS_PER_THREAD: usize = 50;

// 1000 concurrent lookups with distinct keys, each buffer owned and
// released by exactly one caller, with no cross-contamination between
// results.
#[test]
fn concurrent_lookups_test() {
    let mut resolver = FakeResolver::new();

    for t in 0..THREADS {
        for i in 0..LOOKUPS_PER_THREAD {
            let name = format!("icon-{}-{}", t, i);
            let path = format!("/usr/share/icons/test/{}/{}.png", t, i);
            resolver.insert(&name, &path);
        }
    }

    let service = Arc::new(IconLookup::new(resolver));
    let mut handles = Vec::with_capacity(THREADS);

    for t in 0..THREADS {
        let service = Arc::clone(&service);

        handles.push(thread::spawn(move || {
            for i in 0..LOOKUPS_PER_THREAD {
                let name = format!("icon-{}-{}", t, i);
                let expected = format!("/usr/share/icons/test/{}/{}.png", t, i);

                let buffer = service.lookup(&name).unwrap();
                assert_eq!(expected.as_bytes(), buffer.as_bytes());
                assert_eq!(expected.len(), buffer.len());
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
