// Example: infinite loading with a host-driven completion signal.
use infinite_window::{HeightSpec, InfiniteWindow, WindowConfig};

fn main() -> Result<(), infinite_window::Error> {
    let config = WindowConfig::new(400).with_infinite_load_begin_offset(Some(200));
    let mut count = 50usize;
    let mut w = InfiniteWindow::new(&HeightSpec::Constant(20), count, config)?;

    let mut offset = 0u64;
    for now_ms in (0..2_000).step_by(16) {
        offset += 40;
        let update = w.on_scroll(offset, now_ms);
        if update.load_requested {
            println!("t={now_ms} offset={offset}: loading page after {count} items");
            // Pretend the page arrived synchronously.
            count += 50;
            w.set_height_spec(&HeightSpec::Constant(20), count)?;
            w.notify_load_complete();
        }
    }
    println!("final count={count} window={:?}", w.window());
    Ok(())
}
