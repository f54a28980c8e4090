use galaxygen::galaxy::{Galaxy, owner_label};
use galaxygen::generation::spectral::SpectralClass;
use galaxygen::{FactionId, GalaxyError, GalaxyResult, TerritoryMap};
use std::fmt::Write;

/// Generic parser for delimited strings that return tuples
pub fn parse_delimited<T, const N: usize>(
    input: &str,
    delimiter: char,
    type_name: &str,
    parser: impl Fn(&str) -> Result<T, std::num::ParseFloatError>,
) -> GalaxyResult<[T; N]>
where
    T: Copy + Default,
{
    let parts: Vec<&str> = input.split(delimiter).collect();
    if parts.len() != N {
        return Err(GalaxyError::InvalidArgument {
            reason: format!(
                "Invalid {type_name} format '{input}'. Expected {N} {delimiter}-separated values"
            ),
        });
    }

    let mut result = [T::default(); N];
    for (i, part) in parts.iter().enumerate() {
        result[i] = parser(part.trim()).map_err(|_| GalaxyError::InvalidArgument {
            reason: format!("Invalid {type_name} value: '{part}'"),
        })?;
    }

    Ok(result)
}

/// Parse galaxy size string "WIDTHxHEIGHT" in world units
pub fn parse_size(size_str: &str) -> GalaxyResult<(f32, f32)> {
    let [width, height] = parse_delimited::<f32, 2>(size_str, 'x', "size", |s| s.parse())?;

    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(GalaxyError::InvalidArgument {
            reason: "Width and height must be positive".to_string(),
        });
    }

    Ok((width, height))
}

/// Multi-line overview of a generated galaxy
pub fn galaxy_summary(galaxy: &Galaxy) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Galaxy summary:");
    let _ = writeln!(out, "  Seed: {}", galaxy.seed);
    let _ = writeln!(
        out,
        "  Extent: {}x{} centered on the origin",
        galaxy.extent.x, galaxy.extent.y
    );
    let _ = writeln!(
        out,
        "  Stars: {} ({} placed without full separation)",
        galaxy.stars.len(),
        galaxy.star_stats.exhausted
    );

    let classes: Vec<String> = SpectralClass::ALL
        .iter()
        .map(|class| {
            let count = galaxy
                .stars
                .iter()
                .filter(|s| s.spectral_class == *class)
                .count();
            format!("{class}={count}")
        })
        .collect();
    let _ = writeln!(out, "  Spectral classes: {}", classes.join(" "));

    let _ = writeln!(out, "  Planets: {}", galaxy.planet_count());
    let _ = writeln!(
        out,
        "  Asteroids: {} ({} too close to a star)",
        galaxy.asteroids.len(),
        galaxy.asteroid_stats.exhausted
    );

    let _ = writeln!(out, "  Factions:");
    for index in 0..galaxy.faction_count {
        let faction = FactionId::new(index as u8);
        let stars = galaxy.ownership.stars_of(faction);
        let names: Vec<&str> = stars
            .iter()
            .filter_map(|id| galaxy.star(*id))
            .map(|s| s.name.as_str())
            .collect();
        let _ = writeln!(
            out,
            "    {}: {} stars [{}]",
            owner_label(Some(faction)),
            stars.len(),
            names.join(", ")
        );
    }
    let _ = writeln!(out, "    Unclaimed: {} stars", galaxy.ownership.unclaimed_count());

    if let Some(home) = galaxy.origin_star() {
        let _ = writeln!(out, "  Home system: {}", home.name);
        if let Some(world) = galaxy.prime_world() {
            let _ = writeln!(
                out,
                "    Prime world: {} ({}, habitability {})",
                world.name, world.planet_type, world.habitability
            );
        }
    }

    out
}

/// Territory map plus a legend of cell counts per faction
pub fn territory_report(map: &TerritoryMap) -> String {
    let mut out = map.render_ascii();
    let _ = writeln!(out, "Territory cells:");
    for (faction, cells) in map.coverage_by_faction() {
        let _ = writeln!(out, "  {} {}: {}", faction, owner_label(Some(faction)), cells);
    }
    let _ = writeln!(out, "  . Unowned: {}", map.unowned_count());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxygen::config::{GalaxyExtent, GalaxySettings};
    use galaxygen::{GalaxyGenerator, TerritoryGrid};

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("20000x12000").unwrap(), (20_000.0, 12_000.0));
        assert_eq!(parse_size("100.5x50").unwrap(), (100.5, 50.0));

        assert!(parse_size("64").is_err());
        assert!(parse_size("0x64").is_err());
        assert!(parse_size("-5x64").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_parse_delimited_reports_bad_part() {
        let err = parse_delimited::<f32, 2>("1x?", 'x', "size", |s| s.parse()).unwrap_err();
        assert!(err.to_string().contains("Invalid size value"));
    }

    #[test]
    fn test_summary_mentions_every_faction() {
        let settings = GalaxySettings {
            seed: Some(11),
            star_count: 16,
            faction_count: 2,
            asteroid_count: 3,
            extent: GalaxyExtent::new(6_000.0, 4_000.0),
            ..Default::default()
        };
        let galaxy = GalaxyGenerator::new(settings).generate().unwrap();
        let summary = galaxy_summary(&galaxy);

        assert!(summary.contains("Seed: 11"));
        assert!(summary.contains("Stars: 16"));
        assert!(summary.contains("Asteroids: 3"));
        assert!(summary.contains("Terran Concord"));
        assert!(summary.contains("Vexari Dominion"));
        assert!(summary.contains("Prime world"));
    }

    #[test]
    fn test_territory_report() {
        let settings = GalaxySettings {
            seed: Some(12),
            star_count: 10,
            faction_count: 2,
            extent: GalaxyExtent::new(4_000.0, 4_000.0),
            territory_resolution: 8,
            ..Default::default()
        };
        let galaxy = GalaxyGenerator::new(settings.clone()).generate().unwrap();
        let map = TerritoryGrid::from_settings(&settings).compute(&galaxy.stars, &galaxy.ownership);
        let report = territory_report(&map);

        assert_eq!(report.lines().take_while(|l| !l.starts_with("Territory")).count(), 8);
        assert!(report.contains("Unowned"));
    }
}
