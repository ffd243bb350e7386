use grid_route::{find_path, Coordinate, GridMap, Strategy, Terrain};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut map = GridMap::new(3, 3);
    map.set_terrain(Coordinate::new(1, 1), Terrain::Tree).unwrap();
    println!("{}", map);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(2, 2);
    for strategy in Strategy::ALL {
        let path = find_path(&map, start, end, strategy).unwrap().unwrap();
        println!("{strategy} path:");
        for p in &path {
            println!("{}", p);
        }
    }
}
