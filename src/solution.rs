//! src/solution.rs
//!
//! Representeert een kandidaat-oplossing: een onafhankelijke verzameling
//! knopen `S` met per knoop een incrementeel bijgehouden conflict-teller.
//! Voor een lid is de teller −1; voor elke andere knoop telt hij het aantal
//! buren dat in `S` zit. Dit ontwerp geeft O(1) haalbaarheidschecks
//! (`conflict(v) == 0`) en O(deg) updates per toevoeg- of verwijderoperatie,
//! precies wat de lokale zoektocht nodig heeft.

use crate::graph::Graph;

/// Een veranderlijke onafhankelijke verzameling, gebonden aan een `Graph`.
#[derive(Clone, Debug)]
pub struct Solution<'g> {
    graph: &'g Graph,
    members: Vec<usize>,
    conflicts: Vec<i32>,
}

impl<'g> Solution<'g> {
    /*────────── Constructors ──────────*/

    /// Creëert een nieuwe, lege oplossing voor de gegeven graaf.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            members: Vec::new(),
            conflicts: vec![0; graph.n()],
        }
    }

    /*────────── Queries ──────────*/

    /// Geeft de grootte van de oplossing `|S|` terug.
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Geeft de leden van `S` terug, in hun huidige (swap-gemuteerde) volgorde.
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// De conflict-teller van `v`: −1 voor leden, anders het aantal buren in `S`.
    #[inline]
    pub fn conflict(&self, v: usize) -> i32 {
        self.conflicts[v]
    }

    /// Controleert of `v` lid is van `S`.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.conflicts[v] < 0
    }

    /// Geeft een referentie naar de onderliggende graaf.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Controleert of geen twee leden buren zijn. Afleidbaar uit de
    /// conflict-invariant; alleen bedoeld voor tests.
    pub fn is_independent(&self) -> bool {
        self.members.iter().all(|&v| {
            self.graph
                .neighbours(v)
                .iter()
                .all(|&u| !self.contains(u))
        })
    }

    /*────────── Mutators ──────────*/

    /// Voegt knoop `v` toe aan `S`. Vereist `conflict(v) == 0`; een knoop
    /// met buren in `S` toevoegen zou de onafhankelijkheid schenden.
    pub fn add(&mut self, v: usize) {
        assert!(
            self.conflicts[v] == 0,
            "Knoop {} is niet onafhankelijk van S (conflict {})",
            v,
            self.conflicts[v]
        );

        self.members.push(v);
        self.conflicts[v] = -1;
        for &u in self.graph.neighbours(v) {
            self.conflicts[u] += 1;
        }
    }

    /// Verwijdert knoop `v` uit `S` via swap-with-last. Vereist dat `v` lid is.
    pub fn remove(&mut self, v: usize) {
        let pos = self
            .members
            .iter()
            .position(|&m| m == v)
            .unwrap_or_else(|| panic!("Knoop {} zit niet in S", v));
        self.members.swap_remove(pos);

        // Een lid heeft per definitie geen buren in S, dus na verwijdering
        // is zijn eigen teller exact 0.
        self.conflicts[v] = 0;
        for &u in self.graph.neighbours(v) {
            self.conflicts[u] -= 1;
        }
    }
}
