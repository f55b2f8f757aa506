use rowmap::{Mapper, Model, Values};

use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug, Default, Model)]
struct Name {
    #[column("first")]
    first: String,
}

#[derive(Debug, Default, Model)]
struct Person {
    #[column("age")]
    age: i32,

    #[embedded]
    name: Option<Name>,
}

#[test]
fn concurrent_first_use_shares_one_adapter() {
    const THREADS: usize = 8;

    let mapper = Arc::new(Mapper::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let mapper = mapper.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                mapper.adapter::<Person>().unwrap()
            })
        })
        .collect();

    let adapters: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let cached = mapper.adapter::<Person>().unwrap();
    for adapter in &adapters {
        assert!(Arc::ptr_eq(adapter, &cached));
    }
}

#[test]
fn conversions_run_in_parallel() {
    let mapper = Arc::new(Mapper::new());

    let handles: Vec<_> = (0..4)
        .map(|age| {
            let mapper = mapper.clone();
            thread::spawn(move || {
                let row = Values::new().with("age", age).with("first", "T");
                let person: Person = mapper.from_row(&row).unwrap();
                mapper.to_values(&person).unwrap()
            })
        })
        .collect();

    for (age, handle) in handles.into_iter().enumerate() {
        let values = handle.join().unwrap();
        assert_eq!(
            values,
            Values::new()
                .with("age", age as i32)
                .with("first", "T")
        );
    }
}
