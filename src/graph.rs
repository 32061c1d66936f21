//! src/graph.rs
//!
//! Representeert een simpele, ongerichte graaf als buurlijsten (adjacency
//! lists) met gecachte graden. Dit biedt de snelle buur-iteratie die de
//! mieren-constructie en de lokale zoektocht nodig hebben. Ondersteunt het
//! parsen van het DIMACS *.clq-formaat en het on-demand berekenen van de
//! degeneracy (core-getallen) via het klassieke peeling-algoritme.

use bitvec::prelude::*;
use std::io::{self, BufRead, Read};

/// Een ongerichte graaf, opgeslagen als buurlijst per knoop.
///
/// De adjacency kan in principe eenzijdig worden opgebouwd via
/// [`Graph::push_edge`]; alle constructors in deze module laden beide
/// richtingen, want de conflict-administratie van [`crate::Solution`]
/// vereist symmetrie.
#[derive(Clone, Debug)]
pub struct Graph {
    degrees: Vec<usize>,
    neighbours: Vec<Vec<usize>>,
    /// Core-getal per knoop; pas gevuld na `build_degeneracy`.
    degeneracy: Option<Vec<usize>>,
    max_degeneracy: usize,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Creëert een lege graaf met `n` geïsoleerde knopen.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            degrees: vec![0; n],
            neighbours: vec![Vec::new(); n],
            degeneracy: None,
            max_degeneracy: 0,
        }
    }

    /// Bouwt een graaf op basis van een expliciete lijst van kanten
    /// (0-gebaseerde indices). Ongeldige kanten worden genegeerd.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            // Boundary check om panics te voorkomen bij ongeldige edge lists;
            // dubbele kanten zouden de conflict-tellers corrumperen.
            if u < n && v < n && u != v && !g.is_neighbour(u, v) {
                g.add_edge(u, v);
            }
        }
        g
    }

    /// Parset het DIMACS *.clq formaat vanuit een reader.
    pub fn parse_dimacs<R: Read>(reader: R) -> io::Result<Self> {
        let mut graph: Option<Graph> = None;

        for line_result in io::BufReader::new(reader).lines() {
            let line = line_result?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('c') {
                continue;
            }

            let parts: Vec<_> = line.split_whitespace().collect();
            match parts[0] {
                "p" if parts.len() >= 4 && parts[1] == "edge" => {
                    let n: usize = parts[2]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    let _m_expected: usize = parts[3]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    graph = Some(Self::with_vertices(n));
                }
                "e" if parts.len() >= 3 => {
                    let g = graph.as_mut().ok_or_else(|| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            "Edge line 'e' found before problem line 'p'",
                        )
                    })?;
                    let u: usize = parts[1]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    let v: usize = parts[2]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

                    let n = g.n();
                    if u == 0 || v == 0 || u > n || v > n {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("Edge ({}, {}) out of bounds for n={}", u, v, n),
                        ));
                    }
                    // DIMACS is 1-based, wij zijn 0-based. Dubbele kanten en
                    // zelf-lussen zouden de conflict-tellers corrumperen.
                    if u != v && !g.is_neighbour(u - 1, v - 1) {
                        g.add_edge(u - 1, v - 1);
                    }
                }
                _ => { /* Negeer andere of ongeldige regels */ }
            }
        }

        graph.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Missing problem line 'p edge n m'")
        })
    }

    /*────────── Getters ──────────*/

    /// Geeft het aantal knopen (vertices) in de graaf terug.
    #[inline]
    pub fn n(&self) -> usize {
        self.neighbours.len()
    }

    /// Geeft het aantal kanten terug (elke kant eenmaal geteld, mits
    /// symmetrisch geladen).
    pub fn m(&self) -> usize {
        self.degrees.iter().sum::<usize>() / 2
    }

    /// Geeft de graad van knoop `v` terug.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.degrees[v]
    }

    /// Geeft de buurlijst van knoop `v` terug. De volgorde is de
    /// invoegvolgorde; de lijst is niet gesorteerd.
    #[inline]
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.neighbours[v]
    }

    /// Controleert via een lineaire scan of `v` in de buurlijst van `u` staat.
    pub fn is_neighbour(&self, u: usize, v: usize) -> bool {
        self.neighbours[u].contains(&v)
    }

    /// Core-getallen per knoop, of `None` zolang `build_degeneracy` niet is
    /// aangeroepen.
    #[inline]
    pub fn degeneracy(&self) -> Option<&[usize]> {
        self.degeneracy.as_deref()
    }

    /// De degeneracy van de graaf: het maximum van de core-getallen.
    #[inline]
    pub fn max_degeneracy(&self) -> usize {
        self.max_degeneracy
    }

    /*────────── Mutators ──────────*/

    /// Voegt `v` toe aan de buurlijst van `u` (één richting).
    #[inline]
    pub fn push_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.n() && v < self.n(), "Knoopindex buiten bereik");
        self.neighbours[u].push(v);
        self.degrees[u] += 1;
    }

    /// Voegt een ongerichte kant toe tussen knopen `u` en `v`.
    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u != v, "Zelf-lus niet toegestaan");
        self.push_edge(u, v);
        self.push_edge(v, u);
    }

    /// Berekent het core-getal van elke knoop met het peeling-algoritme in
    /// O(n + m): pel herhaaldelijk een knoop met minimale restgraad af en
    /// verlaag de graden van zijn nog aanwezige buren.
    ///
    /// Binnen de minimale bucket wordt LIFO afgepeld (pop van het einde);
    /// die keuze legt de afpelvolgorde vast, en daarmee de reproduceerbaarheid.
    pub fn build_degeneracy(&mut self) {
        let n = self.n();
        let mut core = vec![0usize; n];
        let mut d = self.degrees.clone();

        let max_deg = d.iter().copied().max().unwrap_or(0);

        // bucket[k] bevat de knopen met huidige restgraad k; pos[v] is de
        // positie van v in zijn bucket, zodat verwijderen O(1) blijft via
        // swap-with-last.
        let mut bucket: Vec<Vec<usize>> = vec![Vec::new(); max_deg + 1];
        let mut pos = vec![0usize; n];
        for v in 0..n {
            pos[v] = bucket[d[v]].len();
            bucket[d[v]].push(v);
        }

        let mut removed = bitvec![0; n];
        let mut current = 0usize;
        let mut max_core = 0usize;

        for _ in 0..n {
            while current <= max_deg && bucket[current].is_empty() {
                current += 1;
            }

            let v = bucket[current].pop().expect("niet-lege bucket verwacht");
            removed.set(v, true);
            core[v] = current;
            if current > max_core {
                max_core = current;
            }

            for &u in &self.neighbours[v] {
                if removed[u] || d[u] == 0 {
                    continue;
                }
                // Haal u uit zijn oude bucket via swap-with-last.
                let old = d[u];
                let p = pos[u];
                let last = *bucket[old].last().expect("bucket bevat u");
                bucket[old][p] = last;
                pos[last] = p;
                bucket[old].pop();

                d[u] -= 1;
                pos[u] = bucket[d[u]].len();
                bucket[d[u]].push(u);

                // De minimale restgraad kan met één zakken.
                if d[u] < current {
                    current = d[u];
                }
            }
        }

        self.degeneracy = Some(core);
        self.max_degeneracy = max_core;
    }
}
