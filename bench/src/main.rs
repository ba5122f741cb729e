use country_router_core::{Country, CountryGraph, NodeId, PathSearch, SearchOutcome, Strategy};
use std::time::{Duration, Instant};

/// Three-letter codes give 26^3 distinct countries.
const MAX_NODES: u32 = 26 * 26 * 26;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(250);

    if mode == "help" || mode == "--help" {
        println!("Usage: country-router-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  grid        Square lattice (many equal-length routes)");
        println!("  continent   Ring of countries with random cross-borders");
        println!("  random      Sparse uniform random borders");
        println!("  chain       Single line of countries (deepest route)");
        println!("  barbell     Two dense regions joined by a thin corridor");
        println!();
        println!("Default node_count: 250 (max {})", MAX_NODES);
        return;
    }

    let node_count = node_count.clamp(2, MAX_NODES);

    println!("country-router-bench");
    println!("====================");
    println!();

    let generators: Vec<(&str, fn(u32) -> CountryGraph)> = match mode {
        "grid" => vec![("Grid lattice", gen_grid)],
        "continent" => vec![("Continent ring", gen_continent)],
        "random" => vec![("Random sparse", gen_random)],
        "chain" => vec![("Chain", gen_chain)],
        "barbell" => vec![("Barbell (region-corridor-region)", gen_barbell)],
        "all" => vec![
            ("Grid lattice", gen_grid as fn(u32) -> CountryGraph),
            ("Continent ring", gen_continent),
            ("Random sparse", gen_random),
            ("Chain", gen_chain),
            ("Barbell (region-corridor-region)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u32) -> CountryGraph, node_count: u32) {
    println!("--- {} ---", name);
    println!("Target: {} countries", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    println!(
        "Generated in {:.1}ms — {} countries, {} borders, ~{:.1}KB",
        t.elapsed().as_secs_f64() * 1000.0,
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1024.0
    );

    let far = graph.node_count() as NodeId - 1;
    println!();
    println!(
        "{:>18} {:>8} {:>10} {:>10} {:>10}",
        "strategy", "hops", "expanded", "pruned", "time"
    );
    println!("{:->18} {:->8} {:->10} {:->10} {:->10}", "", "", "", "", "");

    let mut hop_counts = Vec::new();
    for strategy in [Strategy::BranchAndBound, Strategy::BreadthFirst] {
        let search = PathSearch::new(&graph).with_strategy(strategy);
        let (outcome, elapsed) = timed(&search, 0, far);
        let hops = outcome.path.as_ref().map(|p| p.len() - 1);
        hop_counts.push(hops);
        println!(
            "{:>18} {:>8} {:>10} {:>10} {:>8.2}ms",
            search.strategy().to_string(),
            hops.map(|h| h.to_string()).unwrap_or_else(|| "-".into()),
            outcome.stats.expanded,
            outcome.stats.pruned,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    if hop_counts.windows(2).any(|w| w[0] != w[1]) {
        println!("MISMATCH: strategies disagree on hop count {:?}", hop_counts);
    }

    // Sampled pairs: total time per strategy
    let mut rng = FastRng::new(2024);
    let n = graph.node_count() as u64;
    let pairs: Vec<(NodeId, NodeId)> = (0..50)
        .map(|_| {
            (
                rng.next(n) as NodeId,
                rng.next(n) as NodeId,
            )
        })
        .collect();
    println!();
    for strategy in [Strategy::BranchAndBound, Strategy::BreadthFirst] {
        let search = PathSearch::new(&graph).with_strategy(strategy);
        let mut total = Duration::ZERO;
        let mut expanded = 0usize;
        for &(from, to) in &pairs {
            let (outcome, elapsed) = timed(&search, from, to);
            total += elapsed;
            expanded += outcome.stats.expanded;
        }
        println!(
            "{:>18}: {} pairs, {} expansions, {:.2}ms total",
            search.strategy().to_string(),
            pairs.len(),
            expanded,
            total.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn timed(search: &PathSearch<'_>, from: NodeId, to: NodeId) -> (SearchOutcome, Duration) {
    let t = Instant::now();
    let outcome = search
        .run(from, to)
        .unwrap_or_else(|e| panic!("unbounded search failed: {}", e));
    (outcome, t.elapsed())
}

// ---------------------------------------------------------------------------
// Generators — deterministic, symmetric borders unless noted
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

fn code(i: u32) -> String {
    let letter = |n: u32| (b'A' + (n % 26) as u8) as char;
    [letter(i / 676), letter(i / 26), letter(i)].iter().collect()
}

/// Adjacency lists (by index) to a country graph. Duplicate and self borders are dropped.
fn to_graph(adjacency: Vec<Vec<u32>>) -> CountryGraph {
    let countries = adjacency
        .into_iter()
        .enumerate()
        .map(|(i, mut neighbors)| {
            let i = i as u32;
            neighbors.retain(|&n| n != i);
            let mut seen = std::collections::HashSet::new();
            neighbors.retain(|n| seen.insert(*n));
            Country {
                numeric_id: i,
                code3: code(i),
                name: format!("Country {}", i),
                borders: neighbors.into_iter().map(code).collect(),
            }
        })
        .collect();
    CountryGraph::new(countries).unwrap_or_else(|e| panic!("generator produced bad dataset: {}", e))
}

fn link(adjacency: &mut [Vec<u32>], a: u32, b: u32) {
    adjacency[a as usize].push(b);
    adjacency[b as usize].push(a);
}

/// Square lattice. Corner to corner has many equal-length routes, which
/// stresses the incumbent bound.
fn gen_grid(node_count: u32) -> CountryGraph {
    let side = ((node_count as f64).sqrt() as u32).max(2);
    let n = side * side;
    let mut adjacency = vec![Vec::new(); n as usize];
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            if c + 1 < side {
                link(&mut adjacency, id, id + 1);
            }
            if r + 1 < side {
                link(&mut adjacency, id, id + side);
            }
        }
    }
    to_graph(adjacency)
}

/// Ring where each country borders its two ring neighbours, plus a few
/// random cross-borders. Close to a real continent's degree profile.
fn gen_continent(node_count: u32) -> CountryGraph {
    let mut rng = FastRng::new(67890);
    let mut adjacency = vec![Vec::new(); node_count as usize];
    for i in 0..node_count {
        link(&mut adjacency, i, (i + 1) % node_count);
    }
    for _ in 0..node_count / 4 {
        let a = rng.next(node_count as u64) as u32;
        let b = rng.next(node_count as u64) as u32;
        link(&mut adjacency, a, b);
    }
    to_graph(adjacency)
}

/// Uniform random borders, about three per country. Not necessarily connected.
fn gen_random(node_count: u32) -> CountryGraph {
    let mut rng = FastRng::new(54321);
    let mut adjacency = vec![Vec::new(); node_count as usize];
    for _ in 0..node_count * 3 / 2 {
        let a = rng.next(node_count as u64) as u32;
        let b = rng.next(node_count as u64) as u32;
        link(&mut adjacency, a, b);
    }
    to_graph(adjacency)
}

/// 0 - 1 - 2 - ... - (n-1).
fn gen_chain(node_count: u32) -> CountryGraph {
    let mut adjacency = vec![Vec::new(); node_count as usize];
    for i in 1..node_count {
        link(&mut adjacency, i - 1, i);
    }
    to_graph(adjacency)
}

/// Two dense regions joined by a corridor of ten countries. Region A holds
/// the low ids and region B the high ids, so the far pair crosses the corridor.
fn gen_barbell(node_count: u32) -> CountryGraph {
    let corridor = 10u32.min(node_count / 3);
    let region = (node_count - corridor) / 2;
    let n = region * 2 + corridor;
    let mut rng = FastRng::new(99999);
    let mut adjacency = vec![Vec::new(); n as usize];

    let b_start = region + corridor;
    for (start, len) in [(0, region), (b_start, region)] {
        for i in 0..len {
            if i + 1 < len {
                link(&mut adjacency, start + i, start + i + 1);
            }
            for _ in 0..4 {
                let other = rng.next(len as u64) as u32;
                link(&mut adjacency, start + i, start + other);
            }
        }
    }

    // Corridor: last country of A .. first country of B
    let mut prev = region.saturating_sub(1);
    for id in region..b_start {
        link(&mut adjacency, prev, id);
        prev = id;
    }
    link(&mut adjacency, prev, b_start);

    to_graph(adjacency)
}
