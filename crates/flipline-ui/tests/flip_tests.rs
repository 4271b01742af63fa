//! Position transitions observed through the mock host.

use flipline_test_utils::{FRAME_SECS, MockHost, run_frame, settle};
use flipline_ui::{
    ElementHost, FlipConfig, ItemId, ListConfig, ListInput, OrderedItem, ReorderableList,
    TransitionOutcome, Vec2, VisualState,
};

fn list_of(ids: &[i64], config: ListConfig) -> ReorderableList<u32> {
    ReorderableList::new(ids.iter().map(|&id| OrderedItem::new(id, 0)), config).unwrap()
}

fn mounted(ids: &[i64]) -> (ReorderableList<u32>, MockHost) {
    let mut host = MockHost::new();
    let mut list = list_of(ids, ListConfig::default());
    list.mount(&mut host);
    settle(&mut list, &mut host);
    (list, host)
}

fn y_of(host: &MockHost, id: i64) -> f32 {
    host.measure(&ItemId::from(id)).unwrap().y
}

#[test]
fn test_enter_animation_on_mount() {
    let mut host = MockHost::new();
    let mut list = list_of(&[1], ListConfig::default());
    let one = ItemId::from(1);

    let report = list.mount(&mut host);
    assert_eq!(report.entering, vec![one.clone()]);
    assert!(report.moved.is_empty());

    let entering = host.last_style(&one).unwrap();
    assert!(entering.is_snap());
    assert_eq!(host.visual(&one).opacity, 0.0);
    assert_eq!(host.visual(&one).offset, Vec2::new(0.0, 20.0));

    // Phase two only runs on the next frame.
    assert_eq!(list.animator().pending_commits(), 1);
    assert_eq!(list.on_animation_frame(&mut host), 1);
    assert!(host.last_style(&one).unwrap().transition.is_some());

    assert!(host.advance(0.15).is_empty());
    let midway = host.visual(&one);
    assert!(midway.opacity > 0.0 && midway.opacity < 1.0);

    assert_eq!(host.advance(0.15), vec![one.clone()]);
    assert_eq!(host.visual(&one), VisualState::REST);
    assert_eq!(list.on_transition_end(&one, &mut host), TransitionOutcome::Settled);
}

#[test]
fn test_moved_item_starts_at_previous_position() {
    let (mut list, mut host) = mounted(&[1, 2, 3]);
    assert_eq!(y_of(&host, 3), 112.0);

    list.dispatch(ListInput::DragStart { index: 2 }, &mut host);
    list.dispatch(ListInput::DragEnter { index: 0 }, &mut host);

    // Laid out in the first slot, but inverted back to where it was.
    let three = ItemId::from(3);
    assert_eq!(host.measure_layout(&three).unwrap().y, 0.0);
    assert_eq!(host.last_style(&three).unwrap().offset, Vec2::new(0.0, 112.0));
    assert_eq!(y_of(&host, 3), 112.0);
    assert_eq!(y_of(&host, 1), 0.0);

    run_frame(&mut list, &mut host, FRAME_SECS);
    let first_frame = y_of(&host, 3);
    assert!(first_frame < 112.0 && first_frame > 0.0);

    settle(&mut list, &mut host);
    assert_eq!(y_of(&host, 3), 0.0);
    assert_eq!(y_of(&host, 1), 56.0);
}

#[test]
fn test_interrupted_move_continues_from_current_position() {
    let (mut list, mut host) = mounted(&[1, 2, 3]);

    list.dispatch(ListInput::DragStart { index: 2 }, &mut host);
    list.dispatch(ListInput::DragEnter { index: 0 }, &mut host);
    run_frame(&mut list, &mut host, FRAME_SECS);
    run_frame(&mut list, &mut host, 0.1);
    let midway = y_of(&host, 3);

    list.dispatch(ListInput::DragEnter { index: 1 }, &mut host);
    assert_eq!(list.ids(), vec![ItemId::from(1), ItemId::from(3), ItemId::from(2)]);
    assert!((y_of(&host, 3) - midway).abs() < 1e-3);

    list.dispatch(ListInput::Drop, &mut host);
    settle(&mut list, &mut host);
    assert_eq!(y_of(&host, 3), 56.0);
}

#[test]
fn test_unmoved_items_are_not_restyled() {
    let (mut list, mut host) = mounted(&[1, 2, 3, 4]);
    host.clear_calls();

    list.dispatch(ListInput::DragStart { index: 2 }, &mut host);
    list.dispatch(ListInput::DragEnter { index: 3 }, &mut host);

    assert!(host.styles_for(&ItemId::from(1)).is_empty());
    assert!(host.styles_for(&ItemId::from(2)).is_empty());
    assert_eq!(host.styles_for(&ItemId::from(3)).len(), 1);
    assert_eq!(host.styles_for(&ItemId::from(4)).len(), 1);
}

#[test]
fn test_unmeasurable_item_is_skipped() {
    let mut host = MockHost::new();
    let mut list = list_of(&[1, 2], ListConfig::default());
    host.detach(2);

    let report = list.mount(&mut host);
    assert_eq!(report.entering, vec![ItemId::from(1)]);
    assert_eq!(report.unmeasured, vec![ItemId::from(2)]);
    assert!(host.styles_for(&ItemId::from(2)).is_empty());
}

#[test]
fn test_custom_duration() {
    let config = ListConfig::default().with_flip(FlipConfig::from_millis(100));
    let mut host = MockHost::new();
    let mut list = list_of(&[1], config);

    list.mount(&mut host);
    list.on_animation_frame(&mut host);
    assert_eq!(host.advance(0.1), vec![ItemId::from(1)]);
}

#[test]
fn test_pushed_item_enters_at_the_end() {
    let (mut list, mut host) = mounted(&[1, 2]);

    list.push(OrderedItem::new(3, 7), &mut host).unwrap();
    let three = ItemId::from(3);
    assert_eq!(host.measure_layout(&three).unwrap().y, 112.0);
    assert_eq!(host.visual(&three).opacity, 0.0);
    assert_eq!(host.styles_for(&ItemId::from(1)).len(), 2);

    settle(&mut list, &mut host);
    assert_eq!(host.visual(&three), VisualState::REST);
}
