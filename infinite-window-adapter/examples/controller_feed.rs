use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use infinite_window_adapter::{Controller, InfiniteOptions};

fn main() -> Result<(), infinite_window::Error> {
    // Example: a feed that loads another page whenever the user nears the bottom.
    //
    // A host component would:
    // - forward scroll events to on_scroll(offset, now_ms)
    // - call tick(now_ms) from a timer so pointer events come back once scrolling settles
    // - render `window.start_index..window.end_index` between the two spacers
    let wants_page = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&wants_page);

    let options = InfiniteOptions::new(48, 480)
        .with_infinite_load_begin_bottom_offset(240)
        .with_on_infinite_load(Some(move || flag.store(true, Ordering::SeqCst)))
        .with_on_scrolling_change(Some(|s: bool| println!("is_scrolling={s}")));

    let mut count = 40usize;
    let mut c = Controller::new(options, count)?;

    let mut offset = 0u64;
    for now_ms in (0..3_000u64).step_by(16) {
        if now_ms < 2_000 {
            offset += 24;
            let plan = c.on_scroll(offset, now_ms);
            if now_ms % 320 == 0 {
                println!(
                    "t={now_ms} off={offset} items={:?} top={} bottom={} loading={}",
                    plan.window.range(),
                    plan.window.top_spacer,
                    plan.window.bottom_spacer,
                    plan.show_loading_indicator,
                );
            }
        }
        c.tick(now_ms);

        if wants_page.swap(false, Ordering::SeqCst) {
            count += 40;
            c.set_item_count(count)?;
            c.notify_load_complete();
            println!("t={now_ms} loaded page, count={count}");
        }
    }

    println!("done: {:?}", c.render_plan());
    Ok(())
}
