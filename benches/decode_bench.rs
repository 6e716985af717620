use criterion::{criterion_group, criterion_main, Criterion};

use docgrid::{extract_first_table, Grid};

// A generated document shaped like the published puzzle docs: one table,
// cell text wrapped in <p><span> markup.
fn synthetic_document(cells: usize) -> String {
    let mut rows = String::new();
    for i in 0..cells {
        let x = i % 120;
        let y = i / 120;
        let glyph = (b'A' + (i % 26) as u8) as char;
        rows.push_str(&format!(
            "<tr><td><p><span>{}</span></p></td><td><p><span>{}</span></p></td><td><p><span>{}</span></p></td></tr>",
            x, glyph, y
        ));
    }
    format!(
        "<html><body><table><tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>{}</table></body></html>",
        rows
    )
}

fn bench_extract_table(c: &mut Criterion) {
    let html = synthetic_document(2_000);
    c.bench_function("extract_first_table_2k", |b| {
        b.iter(|| extract_first_table(&html).unwrap())
    });
}

fn bench_reconstruct_and_render(c: &mut Criterion) {
    let html = synthetic_document(2_000);
    let table = extract_first_table(&html).unwrap();
    c.bench_function("grid_from_table_render_2k", |b| {
        b.iter(|| {
            let grid = Grid::from_table(&table).unwrap();
            grid.render()
        })
    });
}

criterion_group!(benches, bench_extract_table, bench_reconstruct_and_render);
criterion_main!(benches);
