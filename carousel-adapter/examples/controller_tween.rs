use carousel::{CarouselOptions, Notification};
use carousel_adapter::{Controller, Easing};

fn main() {
    // Example: a frame loop playing autoplay transitions as tweens, without holding any UI
    // objects.
    //
    // An adapter would:
    // - forward clicks/drags to `engine_mut()`
    // - call tick(now_ms) in a frame loop / timer
    // - translate the real track by -offset() and render dots from the notifications
    let options = CarouselOptions::new(5)
        .with_infinite(true)
        .with_autoplay(400);
    let mut c = match Controller::new(&options, 240, Easing::SmoothStep) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    c.on_viewport_size(320.0);

    let mut now_ms = 0u64;
    while now_ms <= 3_000 {
        for n in c.tick(now_ms) {
            match n {
                Notification::AfterSlide(event) => {
                    println!("t={now_ms} settled on item {}", event.item_number)
                }
                Notification::SetIndex {
                    index,
                    animate: false,
                } => println!("t={now_ms} jump to track index {index}"),
                _ => {}
            }
        }
        if c.is_animating() && now_ms % 80 == 0 {
            println!("t={now_ms} offset={:.1}", c.offset());
        }
        now_ms += 16;
    }

    println!(
        "done: dot={} offset={:.1}",
        c.engine().current_dot(),
        c.offset()
    );
}
