// Example: constant-height list, window descriptor per scroll event.
use infinite_window::{HeightSpec, InfiniteWindow, WindowConfig};

fn main() -> Result<(), infinite_window::Error> {
    let mut w =
        InfiniteWindow::new(&HeightSpec::Constant(20), 1_000_000, WindowConfig::new(600))?;
    println!("total_height={}", w.total_height());
    println!("initial={:?}", w.window());

    for (now_ms, offset) in [(0, 0), (16, 250), (32, 299), (48, 300), (64, 123_456)] {
        let update = w.on_scroll(offset, now_ms);
        println!(
            "offset={offset} range={:?} top={} bottom={} recomputed={}",
            update.window.range(),
            update.window.top_spacer,
            update.window.bottom_spacer,
            update.recomputed
        );
    }
    Ok(())
}
