//! Connected-component discovery over the occupied subgraph.
use crate::lattice::Site;
use crate::percolate::{Bond, Cluster};

/// Partition the occupied sites into connected clusters.
///
/// The walk is an explicit-stack depth-first traversal seeded over the
/// full site index range; recursion depth would otherwise grow with
/// cluster size. Every lattice edge whose two ends are occupied becomes
/// exactly one [`Bond`]: a site's edges are scanned once, when the site is
/// expanded, and an edge is emitted while its far end is still
/// unexpanded. Bonds carry a global discovery index that is strictly
/// increasing over the whole run and never reset between clusters, so the
/// flat bond list doubles as a stable reveal schedule.
///
/// Neighbor scan order follows each site's stored neighbor list, making
/// the discovery order fully determined by geometry and occupation.
/// Unoccupied sites are visited but belong to no cluster.
pub fn find_clusters(sites: &[Site]) -> (Vec<Bond>, Vec<Cluster>) {
    let mut visited = vec![false; sites.len()];
    let mut bonds = Vec::new();
    let mut clusters = Vec::new();
    let mut discovery_index = 0;
    let mut stack = Vec::new();

    for seed in 0..sites.len() {
        if visited[seed] {
            continue;
        }
        if !sites[seed].occupied {
            visited[seed] = true;
            continue;
        }

        let mut cluster = Cluster::default();
        stack.push(seed);
        while let Some(current) = stack.pop() {
            // A site can sit on the stack more than once; only its first
            // expansion counts.
            if visited[current] {
                continue;
            }
            visited[current] = true;
            cluster.sites.push(current);

            for &neighbor in &sites[current].neighbors {
                if sites[neighbor].occupied && !visited[neighbor] {
                    cluster.bonds.push(Bond {
                        site_a: current,
                        site_b: neighbor,
                        discovery_index,
                    });
                    discovery_index += 1;
                    stack.push(neighbor);
                }
            }
        }

        bonds.extend_from_slice(&cluster.bonds);
        clusters.push(cluster);
    }

    (bonds, clusters)
}
