use crate::model::{RowArguments, SimulationArguments, StructureArguments};

/// One component column of an engine file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupedRow<'a> {
    Beam(&'a RowArguments),
    Target(&'a RowArguments),
    Both {
        beam: &'a RowArguments,
        target: &'a RowArguments,
    },
}

impl<'a> GroupedRow<'a> {
    /// The row whose element represents the component; the beam row wins when paired.
    pub fn primary(&self) -> &'a RowArguments {
        match *self {
            Self::Beam(row) | Self::Target(row) => row,
            Self::Both { beam, .. } => beam,
        }
    }

    pub fn beam(&self) -> Option<&'a RowArguments> {
        match *self {
            Self::Beam(row) | Self::Both { beam: row, .. } => Some(row),
            Self::Target(_) => None,
        }
    }

    pub fn target(&self) -> Option<&'a RowArguments> {
        match *self {
            Self::Target(row) | Self::Both { target: row, .. } => Some(row),
            Self::Beam(_) => None,
        }
    }
}

/// Orders rows into engine components, skipping rows without a symbol.
///
/// Ungrouped, every row is its own component in index order. Grouped, each target row is
/// paired with the first unused beam row of the same symbol; unpaired beam rows follow all
/// target components.
pub fn group_rows<'a>(
    beam_rows: &'a [RowArguments],
    target_rows: &'a [RowArguments],
    group_elements: bool,
) -> Vec<GroupedRow<'a>> {
    let mut beam: Vec<&RowArguments> = beam_rows
        .iter()
        .filter(|row| !row.symbol.is_empty())
        .collect();
    let mut target: Vec<&RowArguments> = target_rows
        .iter()
        .filter(|row| !row.symbol.is_empty())
        .collect();
    beam.sort_by_key(|row| row.index);
    target.sort_by_key(|row| row.index);

    if !group_elements {
        let mut components: Vec<GroupedRow<'a>> = beam
            .into_iter()
            .map(GroupedRow::Beam)
            .chain(target.into_iter().map(GroupedRow::Target))
            .collect();
        components.sort_by_key(|component| component.primary().index);
        return components;
    }

    let mut used = vec![false; beam.len()];
    let mut components = Vec::with_capacity(beam.len() + target.len());
    for target_row in target {
        let paired = beam
            .iter()
            .enumerate()
            .find(|(position, beam_row)| {
                !used[*position] && beam_row.symbol == target_row.symbol
            })
            .map(|(position, beam_row)| (position, *beam_row));
        match paired {
            Some((position, beam_row)) => {
                used[position] = true;
                components.push(GroupedRow::Both {
                    beam: beam_row,
                    target: target_row,
                });
            }
            None => components.push(GroupedRow::Target(target_row)),
        }
    }
    components.extend(
        beam.into_iter()
            .zip(used)
            .filter(|(_, used)| !used)
            .map(|(row, _)| GroupedRow::Beam(row)),
    );
    components
}

/// Which components carry a target row.
pub fn target_mask(components: &[GroupedRow<'_>]) -> Vec<bool> {
    components
        .iter()
        .map(|component| component.target().is_some())
        .collect()
}

/// Spreads per-target-row layer abundances over all components; other slots are zero.
pub fn expand_layer_abundances(abundances: &[f64], mask: &[bool]) -> Vec<f64> {
    let mut values = abundances.iter().copied();
    mask.iter()
        .map(|present| {
            if *present {
                values.next().unwrap_or(0.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// Inverse of [`expand_layer_abundances`]: keeps the entries of present components.
pub fn collapse_layer_abundances(values: &[f64], mask: &[bool]) -> Vec<f64> {
    values
        .iter()
        .zip(mask)
        .filter(|(_, present)| **present)
        .map(|(value, _)| *value)
        .collect()
}

/// The whole target as one layer named `Layer`, built from the target rows' own
/// abundances (`[1.0]` when there are none).
pub fn single_layer(arguments: &SimulationArguments) -> StructureArguments {
    let mut abundances: Vec<f64> = arguments
        .target_rows
        .iter()
        .map(|row| row.abundance)
        .collect();
    if abundances.is_empty() {
        abundances.push(1.0);
    }
    StructureArguments::new(
        "Layer",
        arguments.target_args.segments,
        arguments.target_args.thickness,
        abundances,
    )
}

#[cfg(test)]
mod tests {
    use super::{
        GroupedRow, collapse_layer_abundances, expand_layer_abundances, group_rows, single_layer,
        target_mask,
    };
    use crate::model::{Element, GeneralArguments, RowArguments, SimulationArguments};

    fn row(index: usize, symbol: &str) -> RowArguments {
        let mut element = Element::empty();
        element.symbol = symbol.to_string();
        RowArguments::new(index, element)
    }

    fn symbols(components: &[GroupedRow<'_>]) -> Vec<String> {
        components
            .iter()
            .map(|component| component.primary().symbol.clone())
            .collect()
    }

    #[test]
    fn matching_beam_and_target_rows_form_one_component() {
        let beam = vec![row(1, "H")];
        let target = vec![row(2, "H")];

        let components = group_rows(&beam, &target, true);

        assert_eq!(components.len(), 1);
        assert!(matches!(components[0], GroupedRow::Both { .. }));
        assert_eq!(target_mask(&components), vec![true]);
    }

    #[test]
    fn unmatched_beam_rows_follow_all_target_components() {
        let beam = vec![row(1, "Ar"), row(2, "H")];
        let target = vec![row(3, "W"), row(4, "H")];

        let components = group_rows(&beam, &target, true);

        assert_eq!(symbols(&components), vec!["W", "H", "Ar"]);
        assert!(components[1].beam().is_some());
        assert!(components[2].target().is_none());
        assert_eq!(target_mask(&components), vec![true, true, false]);
    }

    #[test]
    fn a_beam_row_is_paired_at_most_once() {
        let beam = vec![row(1, "H")];
        let target = vec![row(2, "H"), row(3, "H")];

        let components = group_rows(&beam, &target, true);

        assert_eq!(components.len(), 2);
        assert!(matches!(components[1], GroupedRow::Target(_)));
    }

    #[test]
    fn ungrouped_rows_keep_index_order_and_skip_blank_symbols() {
        let beam = vec![row(3, "Ar")];
        let target = vec![row(1, "W"), row(2, ""), row(4, "Ar")];

        let components = group_rows(&beam, &target, false);

        assert_eq!(symbols(&components), vec!["W", "Ar", "Ar"]);
        assert_eq!(target_mask(&components), vec![true, false, true]);
    }

    #[test]
    fn layer_abundances_expand_and_collapse_through_the_mask() {
        let mask = [false, true, true];
        let expanded = expand_layer_abundances(&[0.4, 0.6], &mask);
        assert_eq!(expanded, vec![0.0, 0.4, 0.6]);
        assert_eq!(collapse_layer_abundances(&expanded, &mask), vec![0.4, 0.6]);
        assert_eq!(expand_layer_abundances(&[1.0], &mask), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn single_layer_falls_back_to_a_pure_layer_without_target_rows() {
        let mut arguments = SimulationArguments::new("TRIDYN", GeneralArguments::new("t"));
        assert_eq!(single_layer(&arguments).abundances, vec![1.0]);

        arguments.target_rows.push(row(1, "Si").with_abundance(0.25));
        arguments.target_rows.push(row(2, "O").with_abundance(0.75));
        let layer = single_layer(&arguments);
        assert_eq!(layer.name, "Layer");
        assert_eq!(layer.abundances, vec![0.25, 0.75]);
        assert_eq!(layer.segments, arguments.target_args.segments);
    }
}
