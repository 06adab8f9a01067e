use oficina_core::{
    client_name, ClientDraft, MemoryStore, OrderDraft, OrderStatus, Priority, RepoError,
    ValidationError, WorkshopRepository, REMOVED_CLIENT_LABEL,
};

fn repo_with_client() -> (WorkshopRepository<MemoryStore>, u64) {
    let mut repo = WorkshopRepository::open(MemoryStore::new());
    let client = repo
        .create_client(&ClientDraft {
            name: "Ana Silva".to_string(),
            ..ClientDraft::default()
        })
        .unwrap();
    (repo, client.id)
}

fn order_draft(client_id: u64) -> OrderDraft {
    OrderDraft {
        client_id,
        description: "Tela quebrada".to_string(),
        ..OrderDraft::default()
    }
}

#[test]
fn create_without_any_client_is_rejected() {
    let mut repo = WorkshopRepository::open(MemoryStore::new());

    let err = repo.create_order(&order_draft(1)).unwrap_err();
    assert!(matches!(err, RepoError::NoClients));
    assert_eq!(repo.document().order_count(), 0);
}

#[test]
fn create_defaults_and_stamps_created_at() {
    let (mut repo, client_id) = repo_with_client();

    let order = repo.create_order(&order_draft(client_id)).unwrap();
    assert_eq!(order.id, 1);
    assert_eq!(order.status, OrderStatus::Open);
    assert_eq!(order.priority, Priority::Medium);
    // %Y-%m-%d %H:%M
    assert_eq!(order.created_at.len(), 16);
    assert_eq!(&order.created_at[4..5], "-");
}

#[test]
fn itemized_costs_sum_when_estimate_is_blank() {
    let (mut repo, client_id) = repo_with_client();

    let order = repo
        .create_order(&OrderDraft {
            estimate: "".to_string(),
            parts_cost: "150,00".to_string(),
            labor_cost: "80,00".to_string(),
            ..order_draft(client_id)
        })
        .unwrap();
    assert_eq!(order.total, 230.00);
}

#[test]
fn estimate_overrides_itemized_sum() {
    let (mut repo, client_id) = repo_with_client();

    let order = repo
        .create_order(&OrderDraft {
            estimate: "300".to_string(),
            parts_cost: "150,00".to_string(),
            labor_cost: "80,00".to_string(),
            ..order_draft(client_id)
        })
        .unwrap();
    assert_eq!(order.total, 300.00);
}

#[test]
fn create_rejects_blank_description() {
    let (mut repo, client_id) = repo_with_client();

    let err = repo
        .create_order(&OrderDraft {
            description: " ".to_string(),
            ..order_draft(client_id)
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyDescription)
    ));
}

#[test]
fn update_recomputes_total_and_keeps_created_at() {
    let (mut repo, client_id) = repo_with_client();
    let order = repo
        .create_order(&OrderDraft {
            parts_cost: "100".to_string(),
            ..order_draft(client_id)
        })
        .unwrap();
    assert_eq!(order.total, 100.0);

    let updated = repo
        .update_order(
            order.id,
            &OrderDraft {
                estimate: "250,50".to_string(),
                status: OrderStatus::InProgress,
                ..order_draft(client_id)
            },
        )
        .unwrap();
    assert_eq!(updated.total, 250.50);
    assert_eq!(updated.status, OrderStatus::InProgress);
    assert_eq!(updated.created_at, order.created_at);
}

#[test]
fn update_is_idempotent_for_same_draft() {
    let (mut repo, client_id) = repo_with_client();
    let order = repo.create_order(&order_draft(client_id)).unwrap();

    let draft = OrderDraft {
        estimate: "99,90".to_string(),
        technician: "Marcos".to_string(),
        ..order_draft(client_id)
    };
    let first = repo.update_order(order.id, &draft).unwrap();
    let second = repo.update_order(order.id, &draft).unwrap();
    assert_eq!(first, second);
}

#[test]
fn update_missing_order_returns_not_found() {
    let (mut repo, client_id) = repo_with_client();

    let err = repo.update_order(9, &order_draft(client_id)).unwrap_err();
    assert!(matches!(err, RepoError::OrderNotFound(9)));
}

#[test]
fn delete_missing_order_returns_not_found() {
    let mut repo = WorkshopRepository::open(MemoryStore::new());

    let err = repo.delete_order(1).unwrap_err();
    assert!(matches!(err, RepoError::OrderNotFound(1)));
}

#[test]
fn order_ids_run_independently_from_client_ids() {
    let (mut repo, client_id) = repo_with_client();

    let order = repo.create_order(&order_draft(client_id)).unwrap();
    assert_eq!(order.id, 1);
    assert_eq!(repo.document().next_client_id, 2);
    assert_eq!(repo.document().next_order_id, 2);
}

#[test]
fn dangling_client_reference_resolves_to_sentinel() {
    let (mut repo, client_id) = repo_with_client();
    repo.create_order(&order_draft(client_id)).unwrap();

    // Simulate an out-of-band client removal: the order keeps pointing at
    // an id that no longer exists.
    let mut doc = repo.document().clone();
    doc.clients.clear();

    assert_eq!(client_name(&doc, client_id), REMOVED_CLIENT_LABEL);
}
