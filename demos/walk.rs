use grid_route::{
    clear_path, search, Coordinate, GridMap, Markers, Playback, PlaybackConfig, Strategy,
};
use std::time::Duration;

// Places markers on a small map, finds a route with A* and plays the walk back on a simulated
// clock, printing the map after every tick. The trail is erased at the end.

fn main() {
    let mut map: GridMap = "\
        ..........
        .TTTT.~~..
        ....T.....
        ~~..T..TT.
        ....T....."
        .parse()
        .unwrap();
    let mut markers = Markers::new();
    markers.place_start(&mut map, Coordinate::new(0, 4)).unwrap();
    markers.place_end(&mut map, Coordinate::new(9, 4)).unwrap();
    let (start, end) = markers.endpoints().unwrap();

    let report = search(&map, start, end, Strategy::AStar).unwrap();
    println!(
        "Expanded {} nodes in {:.3} ms",
        report.expanded,
        report.elapsed.as_secs_f64() * 1000.0
    );
    let Some(path) = report.path else {
        println!("No path from {start} to {end}");
        return;
    };

    let config = PlaybackConfig {
        step_interval: Duration::from_millis(100),
    };
    let mut playback = Playback::new(path, config);
    let mut clock = Duration::ZERO;
    while !playback.is_finished() {
        clock += Duration::from_millis(250);
        for step in playback.advance(&mut map, clock).unwrap() {
            match step.position {
                Some(p) => println!("t={:?}: actor at {p}", clock),
                None => println!("t={:?}: arrived", clock),
            }
        }
        println!("{map}");
    }

    clear_path(&mut map, playback.touched()).unwrap();
    println!("Trail erased:\n{map}");
}
