// Example: a "show 2, scroll 2" infinite carousel driven by hand.
use carousel::{CarouselEngine, CarouselOptions, Notification};

fn main() {
    let options = CarouselOptions::new(7)
        .with_slides_to_show(2)
        .with_slides_to_scroll(2)
        .with_infinite(true);
    let mut e = match CarouselEngine::new(&options) {
        Ok(e) => e,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };

    println!(
        "dots={} clones={} windows={:?}",
        e.table().total_dots(),
        e.table().clone_count(),
        e.table().windows()
    );
    render(&mut e);

    // Step backwards past the first dot: the engine lands on a clone, then relocates.
    println!("prev -> {:?}", e.slide_prev());
    render(&mut e);
    e.transition_started();
    e.transition_ended();
    render(&mut e);

    println!("go_to_slide(3) -> {:?}", e.go_to_slide(3));
    e.transition_started();
    e.transition_ended();
    render(&mut e);
    println!("position={:?}", e.position());
}

fn render(e: &mut CarouselEngine) {
    for n in e.drain_notifications() {
        match n {
            Notification::SetIndex { index, animate } => {
                println!("  track -> {index} (animate={animate})")
            }
            Notification::SetDot { dot } => println!("  dot -> {dot}"),
            other => println!("  {other:?}"),
        }
    }
}
