use std::collections::HashSet;

use floor_editor::{
    CancelRequest, CoordinateMapper, EditorConfig, EditorError, EditorSession, ErrorCode,
    FormField, MemoryStorage, Point, Rect, Reservation, ReservationState, Role, Size, TableId,
    TableUpdate,
};

fn admin_session() -> EditorSession {
    let mut session =
        EditorSession::open(EditorConfig::new(), Box::new(MemoryStorage::new())).unwrap();
    session
        .on_background_image_ready("data:image/png;base64,AAAA")
        .unwrap();
    session
}

fn place(session: &mut EditorSession, at: Point) -> TableId {
    session.begin_add_table().unwrap();
    session.on_pointer_down(at, None);
    session.on_pointer_up(at);
    session.snapshot().tables.last().unwrap().table.id
}

fn assert_reservation_invariant(session: &EditorSession) {
    for view in session.snapshot().tables {
        let table = view.table;
        assert_eq!(
            table.is_reserved(),
            table.reservation.reservation().is_some(),
            "table {} diverged",
            table.id
        );
    }
}

#[test]
fn test_ids_unique_through_create_update_delete() {
    let mut session = admin_session();
    let mut issued = HashSet::new();

    for round in 0..40 {
        let id = place(&mut session, Point::new(round as f64 * 10.0, 30.0));
        assert!(issued.insert(id), "id {id} issued twice");

        if round % 4 == 1 {
            session
                .update_table(
                    id,
                    &TableUpdate {
                        display_number: Some(1),
                        width: Some(500.0),
                        ..Default::default()
                    },
                )
                .unwrap();
        }
        if round % 3 == 0 {
            assert!(session.delete_table(id).unwrap());
        }

        let ids: Vec<_> = session.snapshot().tables.iter().map(|v| v.table.id).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        for view in session.snapshot().tables {
            assert!(session.config().size_bounds.contains(view.table.size));
        }
    }
}

#[test]
fn test_coordinate_round_trip_for_points_inside_viewport() {
    let mapper = CoordinateMapper::new(Size::new(1000.0, 700.0));
    let viewports = [
        Rect::new(0.0, 0.0, 1000.0, 700.0),
        Rect::new(37.0, 12.5, 640.0, 480.0),
        Rect::new(-20.0, 100.0, 333.3, 1024.0),
    ];
    for viewport in viewports {
        for i in 0..=10 {
            for j in 0..=10 {
                let p = Point::new(
                    viewport.x + viewport.width * i as f64 / 10.0,
                    viewport.y + viewport.height * j as f64 / 10.0,
                );
                let back = mapper.to_screen(mapper.to_logical(p, viewport), viewport);
                assert!(back.approx_eq(&p, 1e-9), "{p:?} came back as {back:?}");
            }
        }
    }
}

#[test]
fn test_drag_with_grab_offset_moves_only_the_dragged_table() {
    let mut session = admin_session();
    let dragged = place(&mut session, Point::new(10.0, 10.0));
    let other = place(&mut session, Point::new(400.0, 400.0));

    session.on_pointer_down(Point::new(12.0, 12.0), Some(dragged));
    for step in 1..20 {
        let p = 12.0 + step as f64 * 2.0;
        session.on_pointer_move(Point::new(p, p));
        assert_eq!(session.table(other).unwrap().position, Point::new(400.0, 400.0));
    }
    session.on_pointer_move(Point::new(50.0, 50.0));
    session.on_pointer_up(Point::new(50.0, 50.0));

    assert_eq!(session.table(dragged).unwrap().position, Point::new(48.0, 48.0));
    assert_eq!(session.selected_id(), Some(dragged));
}

#[test]
fn test_drag_is_resolution_independent() {
    let mut session = admin_session();
    let id = place(&mut session, Point::new(100.0, 100.0));

    // Half-size viewport: one screen pixel is two logical units
    session.on_viewport_resized(Rect::new(0.0, 0.0, 500.0, 350.0));
    session.on_pointer_down(Point::new(51.0, 51.0), Some(id));
    session.on_pointer_move(Point::new(61.0, 56.0));
    session.on_pointer_up(Point::new(61.0, 56.0));

    assert_eq!(session.table(id).unwrap().position, Point::new(120.0, 110.0));
}

#[test]
fn test_guest_reservation_requires_every_field() {
    let mut session = admin_session();
    let id = place(&mut session, Point::new(10.0, 10.0));
    session.switch_role(Role::Guest);
    session.on_pointer_down(Point::new(15.0, 15.0), Some(id));
    assert_eq!(session.selected_id(), Some(id));

    session.set_reservation_field(FormField::GuestName, "Alice").unwrap();
    session
        .set_reservation_field(FormField::Time, "2024-01-01T19:00")
        .unwrap();
    assert!(!session.can_confirm_reservation());
    let err = session.confirm_reservation().unwrap_err();
    assert_eq!(err.code(), ErrorCode::ReservationIncomplete);
    assert!(!session.table(id).unwrap().is_reserved());
    assert_reservation_invariant(&session);

    session.set_reservation_field(FormField::Phone, "555-0100").unwrap();
    assert!(session.can_confirm_reservation());
    session.confirm_reservation().unwrap();

    assert_eq!(
        session.table(id).unwrap().reservation,
        ReservationState::Reserved(Reservation::new("Alice", "2024-01-01T19:00", "555-0100"))
    );
    assert_eq!(session.selected_id(), None);
    assert_eq!(session.stats().reserved_tables, 1);
    assert!(session.available_tables().is_empty());
    assert_reservation_invariant(&session);
}

#[test]
fn test_guest_sees_existing_reservation_and_cancels_with_confirmation() {
    let mut session = admin_session();
    let id = place(&mut session, Point::new(10.0, 10.0));
    session.switch_role(Role::Guest);
    session.select(id).unwrap();
    session.set_reservation_field(FormField::GuestName, "Bob").unwrap();
    session.set_reservation_field(FormField::Time, "20:00").unwrap();
    session.set_reservation_field(FormField::Phone, "555").unwrap();
    session.confirm_reservation().unwrap();

    session.on_pointer_down(Point::new(15.0, 15.0), Some(id));
    let form = session.snapshot().reservation_form;
    assert!(form.read_only);
    assert_eq!(form.guest_name, "Bob");
    assert!(session.confirm_reservation().is_err());

    assert_eq!(
        session.request_cancel_reservation().unwrap(),
        CancelRequest::AwaitingConfirmation(id)
    );
    assert!(session.table(id).unwrap().is_reserved());
    session.confirm_cancel_reservation().unwrap();
    assert!(!session.table(id).unwrap().is_reserved());
    assert_eq!(session.selected_id(), None);
    assert_reservation_invariant(&session);
}

#[test]
fn test_admin_cancels_without_confirmation() {
    let mut session = admin_session();
    let id = place(&mut session, Point::new(10.0, 10.0));
    session.switch_role(Role::Guest);
    session.select(id).unwrap();
    session.set_reservation_field(FormField::GuestName, "Bob").unwrap();
    session.set_reservation_field(FormField::Time, "20:00").unwrap();
    session.set_reservation_field(FormField::Phone, "555").unwrap();
    session.confirm_reservation().unwrap();

    session.switch_role(Role::Admin);
    session.select(id).unwrap();
    let request = session.request_cancel_reservation().unwrap();
    assert!(matches!(request, CancelRequest::Cancelled(_)));
    assert!(!session.table(id).unwrap().is_reserved());
    assert_eq!(session.selected_id(), Some(id));
}

#[test]
fn test_role_switch_truncates_drag() {
    let mut session = admin_session();
    let id = place(&mut session, Point::new(10.0, 10.0));

    session.on_pointer_down(Point::new(10.0, 10.0), Some(id));
    session.on_pointer_move(Point::new(70.0, 90.0));
    assert!(session.snapshot().is_dragging);

    session.switch_role(Role::Guest);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.selected_id, None);
    assert!(!snapshot.is_dragging);
    assert_eq!(session.table(id).unwrap().position, Point::new(70.0, 90.0));

    // A late move from the host must not resume the drag
    session.on_pointer_move(Point::new(300.0, 300.0));
    assert_eq!(session.table(id).unwrap().position, Point::new(70.0, 90.0));
}

#[test]
fn test_delete_clears_only_matching_selection() {
    let mut session = admin_session();
    let a = place(&mut session, Point::new(10.0, 10.0));
    let b = place(&mut session, Point::new(200.0, 10.0));

    session.select(a).unwrap();
    assert!(session.delete_table(b).unwrap());
    assert_eq!(session.selected_id(), Some(a));

    assert!(session.delete_selected().unwrap());
    assert_eq!(session.selected_id(), None);
    assert!(session.table(a).is_none());

    // Stale callbacks referencing deleted tables are no-ops
    assert!(!session.delete_table(a).unwrap());
    session.on_pointer_down(Point::new(10.0, 10.0), Some(a));
    assert_eq!(session.selected_id(), None);
    assert!(
        session
            .update_table(a, &TableUpdate::default())
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn test_guest_actions_are_gated() {
    let mut session = admin_session();
    let id = place(&mut session, Point::new(10.0, 10.0));
    session.switch_role(Role::Guest);

    assert!(matches!(
        session.begin_add_table(),
        Err(EditorError::NotPermitted { role: Role::Guest, .. })
    ));
    assert_eq!(
        session.save_layout().unwrap_err().code(),
        ErrorCode::AdminRequired
    );
    assert!(session.delete_table(id).is_err());
    assert!(session.table(id).is_some());
}

#[test]
fn test_new_table_defaults() {
    let mut session = admin_session();
    let first = place(&mut session, Point::new(10.0, 10.0));
    let second = place(&mut session, Point::new(100.0, 10.0));
    let table = session.table(second).unwrap();
    assert_eq!(table.display_number, 2);
    assert_eq!(table.size, Size::new(60.0, 40.0));
    assert_eq!(table.seat_count, 4);
    assert_eq!(session.table(first).unwrap().display_number, 1);
    assert_eq!(session.stats().total_seats, 8);
}
