use super::repo::UpdateResult;
use text_reminders_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|val| val.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    collection.iter().filter(|item| compare(item)).cloned().collect()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|val| val.id() == val_id)?;
    Some(collection.remove(index))
}

/// Applies `update` to the entity with the given id and returns the updated value
pub fn update_one<T: Clone + Entity, U: FnOnce(&mut T)>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    update: U,
) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let val = collection.iter_mut().find(|val| val.id() == val_id)?;
    update(val);
    Some(val.clone())
}

/// Applies `update` to every entity matched by `compare`. The lock is held
/// for the whole update.
pub fn update_many<T, F: Fn(&T) -> bool, U: Fn(&mut T)>(
    collection: &Mutex<Vec<T>>,
    compare: F,
    update: U,
) -> UpdateResult {
    let mut collection = collection.lock().unwrap();
    let mut updated_count = 0;
    for item in collection.iter_mut().filter(|item| compare(item)) {
        update(item);
        updated_count += 1;
    }
    UpdateResult { updated_count }
}
