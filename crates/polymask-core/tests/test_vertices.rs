use polymask_core::vertices::{Vertex, VertexStore};

#[test]
fn test_append_keeps_click_order() {
    let mut store = VertexStore::new();
    store.append(Vertex::new(5, 5));
    store.append(Vertex::new(1, 9));
    store.append(Vertex::new(5, 5));
    assert_eq!(store.count(), 3);
    assert_eq!(
        store.snapshot(),
        vec![Vertex::new(5, 5), Vertex::new(1, 9), Vertex::new(5, 5)]
    );
}

#[test]
fn test_remove_last_pops_most_recent() {
    let mut store = VertexStore::new();
    store.append(Vertex::new(1, 1));
    store.append(Vertex::new(2, 2));
    assert_eq!(store.remove_last(), Some(Vertex::new(2, 2)));
    assert_eq!(store.as_slice(), &[Vertex::new(1, 1)]);
}

#[test]
fn test_remove_last_on_empty_is_noop() {
    let mut store = VertexStore::new();
    assert_eq!(store.remove_last(), None);
    assert!(store.is_empty());
    assert_eq!(store.remove_last(), None);
    assert!(store.is_empty());
}

#[test]
fn test_single_vertex_removed_twice() {
    let mut store = VertexStore::new();
    store.append(Vertex::new(5, 5));
    store.remove_last();
    assert_eq!(store.count(), 0);
    store.remove_last();
    assert_eq!(store.count(), 0);
}

#[test]
fn test_revision_tracks_changes_only() {
    let mut store = VertexStore::new();
    let r0 = store.revision();
    store.remove_last();
    assert_eq!(store.revision(), r0);
    store.append(Vertex::new(3, 4));
    let r1 = store.revision();
    assert!(r1 > r0);
    store.remove_last();
    assert!(store.revision() > r1);
}

#[test]
fn test_snapshot_is_independent_copy() {
    let mut store = VertexStore::new();
    store.append(Vertex::new(7, 8));
    let snap = store.snapshot();
    store.remove_last();
    assert_eq!(snap, vec![Vertex::new(7, 8)]);
    assert!(store.is_empty());
}
