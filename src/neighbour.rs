//! src/neighbour.rs
//!
//! Lokale zoektocht over de incrementeel bijgehouden conflict-tellers:
//! 1-adds (knopen zonder conflict toevoegen), 1-1 swaps (een knoop met één
//! solution-buur wisselen tegen die buur) en 2-1 swaps (een knoop met twee
//! solution-buren wisselen tegen beide). Elke geaccepteerde structurele
//! zet wordt gevolgd door een nieuwe add-fase.

use crate::solution::Solution;

/// Voegt elke knoop met `conflict == 0` toe, in oplopende knoopvolgorde.
/// Geeft het aantal toegevoegde knopen terug.
pub fn try_one_adds(sol: &mut Solution) -> usize {
    let n = sol.graph().n();
    let mut added = 0;
    for v in 0..n {
        if sol.conflict(v) == 0 {
            sol.add(v);
            added += 1;
        }
    }
    added
}

/// Verbetert een geconstrueerde oplossing binnen het gegeven budget.
///
/// * `budget == 0`: uitgeschakeld.
/// * `budget == 1`: 1-adds en 1-1 swaps.
/// * `budget >= 2`: bovendien maximaal `budget − 1` 2-1 swaps.
///
/// Een 1-1 swap wordt alleen geaccepteerd als de add-fase erna minstens één
/// knoop oplevert; anders wordt hij teruggedraaid. Een 2-1 swap verkleint de
/// oplossing lokaal met één en dient als diversificatie; de verplichte
/// add-fase erna maakt dat minimaal goed. De lus eindigt zodra geen
/// verbeterende zet meer bestaat, of het budget geen 2-1 swap meer toelaat.
pub fn improve(sol: &mut Solution, mut budget: usize) {
    if budget == 0 {
        return;
    }

    try_one_adds(sol);

    loop {
        if try_one_one_swap(sol) {
            continue;
        }

        if budget < 2 {
            break;
        }

        match find_two_one_swap(sol) {
            Some((v, out1, out2)) => {
                sol.remove(out1);
                sol.remove(out2);
                sol.add(v);
                budget -= 1;
                try_one_adds(sol);
            }
            None => break,
        }
    }
}

/// Scant in oplopende knoopvolgorde naar een accepteerbare 1-1 swap en
/// voert de eerste uit. Geeft `true` terug zodra er één is geaccepteerd
/// (inclusief de adds van de acceptatietest).
fn try_one_one_swap(sol: &mut Solution) -> bool {
    let n = sol.graph().n();
    for v in 0..n {
        if sol.conflict(v) != 1 {
            continue;
        }

        // De unieke solution-buur van v, gezocht in de huidige ledenvolgorde.
        let out = sol
            .members()
            .iter()
            .copied()
            .find(|&m| sol.graph().is_neighbour(v, m));
        let out = match out {
            Some(u) => u,
            None => continue,
        };

        sol.remove(out);
        sol.add(v);

        if try_one_adds(sol) > 0 {
            return true;
        }

        // Niet verbeterend: draai de swap exact terug.
        sol.remove(v);
        sol.add(out);
    }
    false
}

/// Zoekt de eerste knoop met `conflict == 2` en zijn twee solution-buren.
fn find_two_one_swap(sol: &Solution) -> Option<(usize, usize, usize)> {
    let graph = sol.graph();
    for v in 0..graph.n() {
        if sol.conflict(v) != 2 {
            continue;
        }

        let mut first = None;
        for &m in sol.members() {
            if graph.is_neighbour(v, m) {
                match first {
                    None => first = Some(m),
                    Some(out1) => return Some((v, out1, m)),
                }
            }
        }
    }
    None
}
