// A quick tour of the playdata generators and the CSV importer
use playdata::{parse_points, DatasetKind, Generator, LabeledPoint, Task};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() {
    let mut rng = SmallRng::seed_from_u64(0);

    for kind in DatasetKind::ALL {
        let points: Vec<LabeledPoint<f64>> = kind.generate(200, 0.1, &mut rng);
        let first = points.first().copied().unwrap_or_default();
        println!(
            "{} ({:?}): {} points, first = ({:.3}, {:.3}) -> {:.3}",
            kind,
            kind.task(),
            points.len(),
            first.x,
            first.y,
            first.label
        );
    }

    let csv = "x,y,values\n1,2,0.5\n3,4,-0.2\nbad,4,1\n";
    match parse_points::<f64>(csv, Task::Classification) {
        Ok(points) => println!("imported {} of 3 CSV rows: {:?}", points.len(), points),
        Err(e) => println!("CSV import failed: {e}"),
    }
}
