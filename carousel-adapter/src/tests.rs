use crate::*;

use alloc::vec::Vec;
use carousel::{CarouselEngine, CarouselOptions, ItemRef, Notification, Phase};

fn settle(e: &mut CarouselEngine) -> Vec<Notification> {
    e.transition_started();
    e.transition_ended();
    e.drain_notifications()
}

#[test]
fn tween_samples_between_endpoints() {
    let t = Tween::new(0.0, 200.0, 100, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(150), 100.0);
    assert_eq!(t.sample(500), 200.0);
    assert!(!t.is_done(199));
    assert!(t.is_done(200));

    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }

    let mut t = Tween::new(0.0, 100.0, 0, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    t.retarget(1, -50.0, 10);
    assert_eq!(t.from, 100.0);
    assert_eq!(t.sample(11), -50.0);
}

#[test]
fn controller_plays_transition_and_acknowledges_it() {
    let mut c = Controller::new(&CarouselOptions::new(5), 100, Easing::Linear).unwrap();
    c.on_viewport_size(200.0);
    c.tick(0);
    assert_eq!(c.offset(), 0.0);

    assert!(c.engine_mut().next(0).is_started());
    let out = c.tick(0);
    assert!(out.contains(&Notification::SetIndex {
        index: 1,
        animate: true
    }));
    assert!(c.is_animating());
    assert_eq!(
        c.engine().position_state().phase(),
        Phase::Transitioning { acknowledged: true }
    );

    c.tick(50);
    assert_eq!(c.offset(), 100.0);
    assert!(c.engine().is_animating());

    let out = c.tick(100);
    assert_eq!(c.offset(), 200.0);
    assert!(!c.is_animating());
    assert!(!c.engine().is_animating());
    assert!(
        out.iter()
            .any(|n| matches!(n, Notification::AfterSlide(e) if e.item_number == 2))
    );
}

#[test]
fn controller_jumps_on_wraparound_relocation() {
    let options = CarouselOptions::new(5).with_infinite(true);
    let mut c = Controller::new(&options, 100, Easing::SmoothStep).unwrap();
    c.on_viewport_size(100.0);
    c.tick(0);
    assert_eq!(c.engine().current_index(), 2);
    assert_eq!(c.offset(), 200.0);

    assert!(c.engine_mut().prev(0).is_started());
    c.tick(0);
    let out = c.tick(100);
    assert_eq!(c.engine().current_dot(), 5);
    assert_eq!(c.engine().current_index(), 6);
    assert!(out.contains(&Notification::SetIndex {
        index: 6,
        animate: false
    }));
    assert_eq!(c.offset(), 600.0);
    assert!(!c.is_animating());
}

#[test]
fn controller_snaps_back_after_cancelled_drag() {
    let mut c = Controller::new(&CarouselOptions::new(5), 100, Easing::Linear).unwrap();
    c.on_viewport_size(300.0);
    c.tick(0);

    c.engine_mut().gesture_start(100.0, 0.0);
    c.engine_mut().gesture_move(80.0, 0.0);
    c.tick(10);
    assert_eq!(c.offset(), 20.0);

    c.engine_mut().gesture_end(80.0, 0.0, 10);
    c.tick(10);
    assert!(c.is_animating());
    assert!(!c.engine().is_animating());
    c.tick(60);
    assert_eq!(c.offset(), 10.0);
    c.tick(110);
    assert_eq!(c.offset(), 0.0);
    assert!(!c.is_animating());
}

#[test]
fn controller_drives_autoplay() {
    let options = CarouselOptions::new(3).with_autoplay(1_000);
    let mut c = Controller::new(&options, 100, Easing::EaseInOutCubic).unwrap();
    c.on_viewport_size(100.0);
    c.tick(0);
    c.tick(999);
    assert!(!c.is_animating());
    c.tick(1_000);
    assert!(c.is_animating());
    c.tick(1_100);
    assert!(!c.is_animating());
    assert_eq!(c.engine().current_dot(), 2);
    assert_eq!(c.offset(), 100.0);
}

#[test]
fn finish_animation_ends_transition_immediately() {
    let mut c = Controller::new(&CarouselOptions::new(5), 100, Easing::Linear).unwrap();
    c.on_viewport_size(200.0);
    c.tick(0);
    c.engine_mut().next(0);
    c.tick(0);

    c.finish_animation();
    assert_eq!(c.offset(), 200.0);
    assert!(!c.engine().is_animating());
    let out = c.tick(1);
    assert!(out.iter().any(|n| matches!(n, Notification::AfterSlide(_))));
}

#[test]
fn sync_group_forwards_settled_and_clicked_items() {
    let mut leader = CarouselEngine::new(&CarouselOptions::new(5)).unwrap();
    leader.drain_notifications();

    let mut group = SyncGroup::new();
    group.push(CarouselEngine::new(&CarouselOptions::new(5)).unwrap());
    group.push(CarouselEngine::new(&CarouselOptions::new(3)).unwrap());
    assert_eq!(group.len(), 2);

    leader.go_to_slide(4).unwrap();
    let out = settle(&mut leader);
    assert_eq!(group.forward(&leader, &out), Ok(1));
    assert_eq!(group.followers()[0].current_index(), 3);
    // Three items only: left alone.
    assert_eq!(group.followers()[1].current_index(), 0);

    let follower = group.follower_mut(0).unwrap();
    follower.transition_started();
    follower.transition_ended();
    assert_eq!(group.forward(&leader, &out), Ok(0));

    leader.item_clicked(ItemRef::Real(1), 0).unwrap();
    let out = leader.drain_notifications();
    assert_eq!(group.forward(&leader, &out), Ok(2));
    assert_eq!(group.followers()[0].position().item_number, 2);
    assert_eq!(group.followers()[1].position().item_number, 2);
}

#[test]
fn sync_group_follows_leader_through_wraparound() {
    // Three dots over six items: stepping back from dot 1 rests on dot 3 (items 5 and 6).
    let options = CarouselOptions::new(6)
        .with_slides_to_show(2)
        .with_slides_to_scroll(2)
        .with_infinite(true);
    let mut leader = CarouselEngine::new(&options).unwrap();
    leader.drain_notifications();

    let mut group = SyncGroup::new();
    group.push(CarouselEngine::new(&CarouselOptions::new(6)).unwrap());

    assert!(leader.slide_prev().is_started());
    let out = settle(&mut leader);
    assert!(
        out.iter()
            .any(|n| matches!(n, Notification::AfterSlide(e) if e.item_number == 6))
    );
    assert_eq!(leader.position().item_number, 5);

    assert_eq!(group.forward(&leader, &out), Ok(1));
    assert_eq!(group.followers()[0].position().item_number, 5);

    // Stepping forward off the last dot wraps to item 1.
    let follower = group.follower_mut(0).unwrap();
    follower.transition_started();
    follower.transition_ended();
    assert!(leader.slide_next().is_started());
    let out = settle(&mut leader);
    assert_eq!(leader.position().item_number, 1);
    assert_eq!(group.forward(&leader, &out), Ok(1));
    assert_eq!(group.followers()[0].position().item_number, 1);
}
