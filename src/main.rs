//! Demo runner: aggregates a small house-ownership sample and prints the
//! chart data and narrative for both locales.

use std::collections::BTreeMap;
use wardstat::charts;
use wardstat::locale::Locale;
use wardstat::models::{CategoryDef, CategorySet, RawObservation};
use wardstat::pipeline::{self, NarrativeTemplateSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let categories = CategorySet::new(vec![
        CategoryDef::new("owned", "Owned", "निजी").with_color("#5470c6"),
        CategoryDef::new("rented", "Rented", "भाडामा").with_color("#91cc75"),
        CategoryDef::new("institutional", "Institutional", "संस्थागत").with_color("#fac858"),
        CategoryDef::new("other", "Other", "अन्य").with_color("#ee6666"),
    ]);

    let observations = vec![
        RawObservation::new(1, "owned", 80.0),
        RawObservation::new(1, "rented", 20.0),
        RawObservation::new(2, "owned", 30.0),
        RawObservation::new(2, "owned", 10.0),
        RawObservation::new(2, "rented", 55.0),
        RawObservation::new(2, "institutional", 5.0),
        RawObservation::new(3, "owned", 120.0),
        RawObservation::new(3, "other", 12.0),
    ];

    let normalized = pipeline::normalize(&observations, &categories)?;
    let percentages = pipeline::to_percentages(&normalized.aggregates);

    println!("Ward aggregates:");
    for ward in &normalized.aggregates {
        println!("  ward {} total {}", ward.ward_number, ward.total);
        for (key, value) in &ward.categories {
            let pct = percentages
                .iter()
                .find(|p| p.ward_number == ward.ward_number)
                .and_then(|p| p.percentages.get(key))
                .copied()
                .unwrap_or(0.0);
            println!("    {:<15} {:>8.1} ({:.1}%)", key, value, pct);
        }
    }

    println!("\nMunicipal pie (ne labels):");
    for datum in charts::municipal_pie(&percentages, &categories, Locale::Ne) {
        println!("  {:<12} value {:>8.1} share {:.1}%", datum.name, datum.value, datum.percentage);
    }

    for locale in [Locale::En, Locale::Ne] {
        let templates = sample_templates(locale);
        let narrative = pipeline::narrative_or_fallback(&percentages, locale, &templates);
        println!("\nNarrative ({}):\n  {}", locale, narrative);
    }

    Ok(())
}

fn sample_templates(locale: Locale) -> NarrativeTemplateSet {
    match locale {
        Locale::En => NarrativeTemplateSet {
            summary: "Across {ward_count} wards, ward {highest_ward} records the highest \
                      share of {highest_category} households at {highest_pct} percent, while \
                      ward {lowest_ward} records the lowest share of {lowest_category} at \
                      {lowest_pct} percent. The municipal average for {highest_category} is \
                      {highest_category_avg} percent."
                .to_string(),
            no_data: "Data for this indicator is not yet available.".to_string(),
            category_labels: BTreeMap::from([
                ("owned".to_string(), "owner-occupied".to_string()),
                ("rented".to_string(), "rented".to_string()),
                ("institutional".to_string(), "institutional".to_string()),
                ("other".to_string(), "other".to_string()),
            ]),
        },
        Locale::Ne => NarrativeTemplateSet {
            summary: "गाउँपालिकाका {ward_count} वडामध्ये वडा नं. {highest_ward} मा {highest_category} \
                      घरपरिवारको हिस्सा सबैभन्दा बढी {highest_pct} प्रतिशत रहेको छ भने वडा नं. \
                      {lowest_ward} मा {lowest_category} को हिस्सा सबैभन्दा कम {lowest_pct} प्रतिशत \
                      रहेको छ । गाउँपालिकाभर {highest_category} को औसत {highest_category_avg} \
                      प्रतिशत रहेको छ ।"
                .to_string(),
            no_data: "यस सूचकका लागि तथ्याङ्क उपलब्ध छैन ।".to_string(),
            category_labels: BTreeMap::from([
                ("owned".to_string(), "निजी स्वामित्व".to_string()),
                ("rented".to_string(), "भाडामा".to_string()),
                ("institutional".to_string(), "संस्थागत".to_string()),
                ("other".to_string(), "अन्य".to_string()),
            ]),
        },
    }
}
