// cargo test -p taster-allocation-store --test memory_store

use taster_allocation_core::{
    AssignmentChange, AssignmentKind, DeviceId, NewTaster, Role, Seat, StoreError, TableNumber,
    TasterStore,
};
use taster_allocation_store::MemoryTasterStore;

fn new_taster(code: &str) -> NewTaster {
    NewTaster {
        code: code.to_owned(),
        full_name: format!("Taster {code}"),
        country: "ES".to_owned(),
        email: format!("{code}@example.org"),
        role: Role::Ordinary,
    }
}

#[tokio::test]
async fn insert_assigns_ids_and_empty_assignments() {
    let store = MemoryTasterStore::new();
    let first = store.insert(new_taster("C-1")).await.unwrap();
    let second = store.insert(new_taster("C-2")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(first.active);
    assert_eq!(first.table, None);
    assert_eq!(first.seat, None);
    assert_eq!(first.device, None);
}

#[tokio::test]
async fn load_all_orders_by_code() {
    let store = MemoryTasterStore::new();
    store.insert(new_taster("C-3")).await.unwrap();
    store.insert(new_taster("C-1")).await.unwrap();
    store.insert(new_taster("C-2")).await.unwrap();

    let codes: Vec<String> = store
        .load_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.code)
        .collect();
    assert_eq!(codes, vec!["C-1", "C-2", "C-3"]);
}

#[tokio::test]
async fn update_then_load_round_trips() {
    let store = MemoryTasterStore::new();
    let taster = store.insert(new_taster("C-1")).await.unwrap();

    store
        .update_assignment(
            taster.id,
            AssignmentChange::Table(Some(TableNumber::new(2).unwrap())),
        )
        .await
        .unwrap();
    store
        .update_assignment(taster.id, AssignmentChange::Seat(Some(Seat::new(4).unwrap())))
        .await
        .unwrap();
    store
        .update_assignment(
            taster.id,
            AssignmentChange::Device(Some(DeviceId::new("9").unwrap())),
        )
        .await
        .unwrap();

    let roster = store.load_all().await.unwrap();
    let reloaded = roster.iter().find(|t| t.id == taster.id).unwrap();
    assert_eq!(reloaded.table, Some(TableNumber::new(2).unwrap()));
    assert_eq!(reloaded.seat, Some(Seat::new(4).unwrap()));
    assert_eq!(reloaded.device, Some(DeviceId::new("9").unwrap()));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = MemoryTasterStore::new();
    let result = store
        .update_assignment(42, AssignmentChange::Seat(Some(Seat::new(1).unwrap())))
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(42))));
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let store = MemoryTasterStore::new();
    let taster = store.insert(new_taster("C-1")).await.unwrap();
    store.insert(new_taster("C-2")).await.unwrap();

    store.delete(taster.id).await.unwrap();
    assert_eq!(store.load_all().await.unwrap().len(), 1);
    assert!(matches!(
        store.delete(taster.id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn clear_is_idempotent_and_reports_update_all_count() {
    let store = MemoryTasterStore::new();
    for (i, code) in ["C-1", "C-2", "C-3"].iter().enumerate() {
        let taster = store.insert(new_taster(code)).await.unwrap();
        store
            .update_assignment(
                taster.id,
                AssignmentChange::Table(Some(TableNumber::new(i32::try_from(i).unwrap() + 1).unwrap())),
            )
            .await
            .unwrap();
    }

    let first = store.clear_assignments(AssignmentKind::Table).await.unwrap();
    assert_eq!(first, 3);
    let cleared = store.load_all().await.unwrap();
    assert!(cleared.iter().all(|t| t.table.is_none()));

    // second run touches the same rows and changes nothing
    let second = store.clear_assignments(AssignmentKind::Table).await.unwrap();
    assert_eq!(second, 3);
    assert_eq!(store.load_all().await.unwrap(), cleared);
}

#[tokio::test]
async fn table_count_setting_round_trips() {
    let store = MemoryTasterStore::with_table_count(7);
    assert_eq!(store.load_table_count().await.unwrap(), Some(7));

    store.set_table_count(None).await;
    assert_eq!(store.load_table_count().await.unwrap(), None);
}
