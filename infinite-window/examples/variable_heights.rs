// Example: variable-height items and offset lookup.
use infinite_window::{HeightModel, HeightSpec, InfiniteWindow, WindowConfig};

fn main() -> Result<(), infinite_window::Error> {
    let heights: Vec<u32> = (0..10_000).map(|i| 16 + (i % 7) * 4).collect();
    let model = HeightModel::variable(&heights);
    println!("total_height={}", model.total_height());
    println!("item_at(50_000)={:?}", model.index_at_offset(50_000));

    let mut w = InfiniteWindow::new(
        &HeightSpec::Variable(heights.clone()),
        heights.len(),
        WindowConfig::new(480),
    )?;
    let update = w.on_scroll(50_000, 0);
    println!("window={:?}", update.window);
    Ok(())
}
