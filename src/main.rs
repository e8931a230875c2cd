use std::error::Error;

use generic_containers::collections::bounded::BoundedList;
use generic_containers::collections::manager::GenericArrayManager;
use generic_containers::collections::queue::Queue;
use generic_containers::collections::stack::Stack;
use generic_containers::collections::store::{KeyValueStore, MultiGenericStore};
use generic_containers::collections::traits::ArrayManager;
use generic_containers::generics::{remove_duplicates, sort_array};
use generic_containers::nested::find_value_by_key;
use generic_containers::node;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    info!("salom");

    let mut limited = BoundedList::new(2)?;
    for i in 0..3 {
        match limited.append(i) {
            Ok(()) => info!(item = i, len = limited.len(), "appended to bounded list"),
            Err(err) => warn!(item = err.item, "{err}"),
        }
    }

    let mut stack: Stack<_> = ["a", "b", "c"].into_iter().collect();
    while let Some(top) = stack.pop() {
        info!(top, "popped from stack");
    }

    let mut queue: Queue<_> = ["a", "b", "c"].into_iter().collect();
    while let Some(front) = queue.dequeue() {
        info!(front, "dequeued from queue");
    }

    let mut store = KeyValueStore::<&str, u32>::new();
    store.add_pair("id", 1);
    store.add_pair("id", 2);
    info!(value = ?store.get_value("id"), missing = ?store.get_value("nope"), "store lookups");

    let mut manager = GenericArrayManager::new();
    for word in ["x", "y", "x"] {
        manager.add(word);
    }
    let removed = manager.remove(&"x");
    let out_of_range = manager.remove_at_index(-1);
    info!(removed, ?out_of_range, array = ?manager.get_array(), "array manager");

    let data = node!({ "a": 1, "b": { "a": 2, "c": { "a": 3 } }, "d": [{ "a": 99 }] });
    for (i, found) in find_value_by_key(&data, "a").into_iter().enumerate() {
        info!(i, %found, "found value for key \"a\"");
    }

    info!(sorted = ?sort_array(&[3, 1, 2]), unique = ?remove_duplicates(&[1, 1, 2]), "helpers");

    let delegate = MultiGenericStore::new("user_id", 12345);
    info!(key = delegate.delegate_key(), value = delegate.value(), "multi generic store");

    Ok(())
}
