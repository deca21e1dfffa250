//! Build OncoKB annotation queries from a table of alterations.
//!
//! The input is a TSV file with a header line and the columns
//!
//! 1. `kind` (`mutation`, `copy_number`, `structural_variant`, `structural_variant_genes`)
//! 2. `entrez_gene_id`
//! 3. `tumor_type`
//! 4. `alteration`
//! 5. `consequence`
//! 6. `protein_start`
//! 7. `protein_end`
//! 8. `site2_entrez_gene_id`
//! 9. `sv_type`
//!
//! Empty cells are missing values and lines starting with `#` are skipped.

use std::collections::HashSet;
use std::io::Write;

use anyhow::Context;
use clap::Parser;

use crate::common::io::std::{open_read_maybe_gz, open_write_maybe_gz};
use crate::query::evidence::EvidenceType;
use crate::query::seqvars::is_intragenic_alteration;
use crate::query::{
    generate_annotate_structural_variant_query,
    generate_annotate_structural_variant_query_from_genes, generate_copy_number_alteration_query,
    generate_protein_change_query, AnnotateCopyNumberAlterationQuery,
    AnnotateMutationByProteinChangeQuery, AnnotateStructuralVariantQuery, StructuralVariantType,
};

/// Command line arguments for `annotate queries` sub command.
#[derive(Parser, Debug)]
#[command(about = "Build OncoKB queries from a TSV file of alterations", long_about = None)]
pub struct Args {
    /// Path to the input TSV file.
    #[arg(long)]
    pub path_input_tsv: String,
    /// Path to the output JSON file.
    #[arg(long)]
    pub path_output_json: String,
    /// Evidence types to request; all are returned by OncoKB if missing.
    #[arg(long, value_delimiter = ',')]
    pub evidence_types: Vec<EvidenceType>,
    /// For debug purposes, maximal number of records to read.
    #[arg(long)]
    pub max_record_count: Option<usize>,
}

/// Kind of alteration in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlterationKind {
    /// Mutation annotated by protein change.
    Mutation,
    /// Copy number alteration, e.g., `Amplification`.
    CopyNumber,
    /// Structural variant described in free text, e.g., `EML4-ALK fusion`.
    StructuralVariant,
    /// Structural variant given by the genes at its two sites.
    StructuralVariantGenes,
}

/// One line of the input TSV file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct AlterationRecord {
    pub kind: AlterationKind,
    pub entrez_gene_id: i32,
    pub tumor_type: Option<String>,
    pub alteration: Option<String>,
    pub consequence: Option<String>,
    pub protein_start: Option<i32>,
    pub protein_end: Option<i32>,
    pub site2_entrez_gene_id: Option<i32>,
    pub sv_type: Option<StructuralVariantType>,
}

/// A query for one of the OncoKB annotate endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotateQuery {
    ProteinChange(AnnotateMutationByProteinChangeQuery),
    CopyNumberAlteration(AnnotateCopyNumberAlterationQuery),
    StructuralVariant(AnnotateStructuralVariantQuery),
}

impl AnnotateQuery {
    /// The query identifier.
    pub fn id(&self) -> &str {
        match self {
            AnnotateQuery::ProteinChange(query) => &query.id,
            AnnotateQuery::CopyNumberAlteration(query) => &query.id,
            AnnotateQuery::StructuralVariant(query) => &query.id,
        }
    }
}

impl AlterationRecord {
    /// Convert the record into the matching OncoKB query.
    ///
    /// Mutations with an intragenic alteration are annotated as structural
    /// variants.
    pub fn to_query(
        &self,
        evidence_types: Option<&[EvidenceType]>,
    ) -> Result<AnnotateQuery, anyhow::Error> {
        let evidence_types = evidence_types.map(<[EvidenceType]>::to_vec);
        let tumor_type = self.tumor_type.as_deref();
        let required_alteration = || {
            self.alteration.as_deref().ok_or_else(|| {
                anyhow::anyhow!("alteration is required for {:?} records", self.kind)
            })
        };

        Ok(match self.kind {
            AlterationKind::Mutation => match self.alteration.as_deref() {
                Some(alteration) if is_intragenic_alteration(alteration) => {
                    tracing::debug!(
                        "annotating {}:{} as structural variant",
                        self.entrez_gene_id,
                        alteration
                    );
                    AnnotateQuery::StructuralVariant(generate_annotate_structural_variant_query(
                        self.entrez_gene_id,
                        tumor_type,
                        alteration,
                        self.consequence.as_deref(),
                        evidence_types,
                    ))
                }
                alteration => AnnotateQuery::ProteinChange(generate_protein_change_query(
                    self.entrez_gene_id,
                    tumor_type,
                    alteration,
                    self.consequence.as_deref(),
                    self.protein_start,
                    self.protein_end,
                    evidence_types,
                )),
            },
            AlterationKind::CopyNumber => {
                AnnotateQuery::CopyNumberAlteration(generate_copy_number_alteration_query(
                    self.entrez_gene_id,
                    tumor_type,
                    required_alteration()?,
                    evidence_types,
                ))
            }
            AlterationKind::StructuralVariant => {
                AnnotateQuery::StructuralVariant(generate_annotate_structural_variant_query(
                    self.entrez_gene_id,
                    tumor_type,
                    required_alteration()?,
                    self.consequence.as_deref(),
                    evidence_types,
                ))
            }
            AlterationKind::StructuralVariantGenes => {
                let sv_type = self.sv_type.ok_or_else(|| {
                    anyhow::anyhow!("sv_type is required for structural_variant_genes records")
                })?;
                AnnotateQuery::StructuralVariant(
                    generate_annotate_structural_variant_query_from_genes(
                        self.entrez_gene_id,
                        self.site2_entrez_gene_id,
                        tumor_type,
                        sv_type,
                        evidence_types,
                    ),
                )
            }
        })
    }
}

/// The queries for the three OncoKB annotate endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryBatch {
    /// Queries for `annotate/mutations/byProteinChange`.
    pub protein_change: Vec<AnnotateMutationByProteinChangeQuery>,
    /// Queries for `annotate/copyNumberAlterations`.
    pub copy_number_alterations: Vec<AnnotateCopyNumberAlterationQuery>,
    /// Queries for `annotate/structuralVariants`.
    pub structural_variants: Vec<AnnotateStructuralVariantQuery>,
}

/// Collects queries into a `QueryBatch`, keeping the first query per identifier and endpoint.
#[derive(Debug, Default)]
pub struct QueryBatchBuilder {
    batch: QueryBatch,
    seen_protein_change: HashSet<String>,
    seen_copy_number: HashSet<String>,
    seen_structural_variant: HashSet<String>,
}

impl QueryBatchBuilder {
    /// Add a query; returns `false` if a query with the same identifier was already added.
    pub fn push(&mut self, query: AnnotateQuery) -> bool {
        let id = query.id().to_string();
        match query {
            AnnotateQuery::ProteinChange(query) => {
                let is_new = self.seen_protein_change.insert(id);
                if is_new {
                    self.batch.protein_change.push(query);
                }
                is_new
            }
            AnnotateQuery::CopyNumberAlteration(query) => {
                let is_new = self.seen_copy_number.insert(id);
                if is_new {
                    self.batch.copy_number_alterations.push(query);
                }
                is_new
            }
            AnnotateQuery::StructuralVariant(query) => {
                let is_new = self.seen_structural_variant.insert(id);
                if is_new {
                    self.batch.structural_variants.push(query);
                }
                is_new
            }
        }
    }

    pub fn build(self) -> QueryBatch {
        self.batch
    }
}

/// Streaming reader for the alteration TSV file.
pub struct RecordReader {
    path: String,
    reader: csv::Reader<Box<dyn std::io::BufRead>>,
    headers: csv::StringRecord,
    record: csv::StringRecord,
}

impl RecordReader {
    /// Open the given, possibly gzip-compressed, TSV file and read its header.
    pub fn from_path(path: &str) -> Result<Self, anyhow::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .comment(Some(b'#'))
            .has_headers(true)
            .from_reader(open_read_maybe_gz(path)?);
        let headers = reader
            .headers()
            .with_context(|| format!("problem reading header from {}", path))?
            .clone();
        Ok(Self {
            path: path.to_string(),
            reader,
            headers,
            record: csv::StringRecord::new(),
        })
    }

    /// Read the next record together with its line number, `None` at the end of file.
    pub fn read_record(&mut self) -> Result<Option<(u64, AlterationRecord)>, anyhow::Error> {
        if !self
            .reader
            .read_record(&mut self.record)
            .with_context(|| format!("problem reading record from {}", &self.path))?
        {
            return Ok(None);
        }
        let line = self.record.position().map_or(0, |pos| pos.line());
        let record = self
            .record
            .deserialize(Some(&self.headers))
            .with_context(|| format!("problem parsing line {} of {}", line, &self.path))?;
        Ok(Some((line, record)))
    }
}

/// Main entry point for `annotate queries` sub command.
pub fn run(_common: &crate::common::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::info!("config = {:#?}", &args);
    let before_building = std::time::Instant::now();

    let evidence_types = if args.evidence_types.is_empty() {
        None
    } else {
        Some(args.evidence_types.as_slice())
    };

    let mut reader = RecordReader::from_path(&args.path_input_tsv)?;
    let mut builder = QueryBatchBuilder::default();
    let mut n_records = 0usize;
    let mut n_duplicates = 0usize;
    loop {
        if args.max_record_count.is_some_and(|max| n_records >= max) {
            tracing::warn!("Stopping after {} records as requested", n_records);
            break;
        }
        let Some((line, record)) = reader.read_record()? else {
            break;
        };
        let query = record
            .to_query(evidence_types)
            .with_context(|| format!("problem with line {}: {:?}", line, &record))?;
        tracing::trace!("line {} has query id {}", line, query.id());
        if !builder.push(query) {
            n_duplicates += 1;
        }
        n_records += 1;
    }
    let batch = builder.build();

    tracing::info!(
        "Built {} protein change, {} copy number, and {} structural variant queries \
        from {} records ({} duplicates) in {:?}",
        batch.protein_change.len(),
        batch.copy_number_alterations.len(),
        batch.structural_variants.len(),
        n_records,
        n_duplicates,
        before_building.elapsed()
    );

    let mut writer = open_write_maybe_gz(&args.path_output_json)?;
    serde_json::to_writer_pretty(&mut writer, &batch)
        .with_context(|| format!("problem writing {}", &args.path_output_json))?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use clap_verbosity_flag::Verbosity;
    use pretty_assertions::assert_eq;
    use temp_testdir::TempDir;

    use super::*;

    fn record(kind: AlterationKind, alteration: Option<&str>) -> AlterationRecord {
        AlterationRecord {
            kind,
            entrez_gene_id: 673,
            tumor_type: Some(String::from("MEL")),
            alteration: alteration.map(str::to_string),
            consequence: None,
            protein_start: None,
            protein_end: None,
            site2_entrez_gene_id: None,
            sv_type: None,
        }
    }

    #[test]
    fn mutation_to_protein_change() -> Result<(), anyhow::Error> {
        let query = record(AlterationKind::Mutation, Some("V600E")).to_query(None)?;

        match query {
            AnnotateQuery::ProteinChange(query) => assert_eq!(query.id, "673_MEL_V600E"),
            _ => panic!("unexpected query {:?}", query),
        }

        Ok(())
    }

    #[test]
    fn intragenic_mutation_to_structural_variant() -> Result<(), anyhow::Error> {
        let query = record(AlterationKind::Mutation, Some("BRAF-intragenic"))
            .to_query(Some(&[EvidenceType::Oncogenic]))?;

        match query {
            AnnotateQuery::StructuralVariant(query) => {
                assert_eq!(query.structural_variant_type, StructuralVariantType::Deletion);
                assert!(!query.functional_fusion);
                assert_eq!(query.evidence_types, Some(vec![EvidenceType::Oncogenic]));
            }
            _ => panic!("unexpected query {:?}", query),
        }

        Ok(())
    }

    #[test]
    fn copy_number_requires_alteration() {
        assert!(record(AlterationKind::CopyNumber, None).to_query(None).is_err());
        assert!(record(AlterationKind::StructuralVariant, None)
            .to_query(None)
            .is_err());
    }

    #[test]
    fn genes_require_sv_type() -> Result<(), anyhow::Error> {
        let mut genes = record(AlterationKind::StructuralVariantGenes, None);
        assert!(genes.to_query(None).is_err());

        genes.sv_type = Some(StructuralVariantType::Deletion);
        match genes.to_query(None)? {
            AnnotateQuery::StructuralVariant(query) => {
                assert_eq!(query.id, "673_undefined_DELETION_MEL");
                assert!(!query.functional_fusion);
            }
            query => panic!("unexpected query {:?}", query),
        }

        Ok(())
    }

    #[test]
    fn builder_drops_duplicates() -> Result<(), anyhow::Error> {
        let mut builder = QueryBatchBuilder::default();
        let mutation = record(AlterationKind::Mutation, Some("V600E"));
        let cna = record(AlterationKind::CopyNumber, Some("V600E"));

        assert!(builder.push(mutation.to_query(None)?));
        assert!(!builder.push(mutation.to_query(None)?));
        // Same identifier, different endpoint.
        assert!(builder.push(cna.to_query(None)?));

        let batch = builder.build();
        assert_eq!(batch.protein_change.len(), 1);
        assert_eq!(batch.copy_number_alterations.len(), 1);
        assert!(batch.structural_variants.is_empty());

        Ok(())
    }

    #[test]
    fn read_records_from_tsv() -> Result<(), anyhow::Error> {
        let mut reader = RecordReader::from_path("tests/data/queries/alterations.tsv")?;
        let mut records = Vec::new();
        while let Some(record) = reader.read_record()? {
            records.push(record);
        }

        assert_eq!(records.len(), 8);
        let (line, first) = &records[0];
        assert_eq!(*line, 3);
        assert_eq!(first.kind, AlterationKind::Mutation);
        assert_eq!(first.protein_start, Some(600));
        assert_eq!(records[2].1.alteration.as_deref(), Some("Amplification"));
        assert_eq!(records[2].1.consequence, None);
        assert_eq!(records[6].1.site2_entrez_gene_id, Some(238));
        assert_eq!(records[7].1.sv_type, Some(StructuralVariantType::Deletion));
        assert_eq!(records[7].0, 10);

        Ok(())
    }

    #[test]
    fn limit_stops_reading() -> Result<(), anyhow::Error> {
        let temp = TempDir::default();
        let path_in = temp.join("in.tsv");
        let path_out = temp.join("out.json");
        std::fs::write(
            &path_in,
            "kind\tentrez_gene_id\ttumor_type\talteration\tconsequence\tprotein_start\t\
             protein_end\tsite2_entrez_gene_id\tsv_type\n\
             mutation\t673\t\tV600E\t\t\t\t\t\n\
             mutation\tNOT_A_NUMBER\t\tV600E\t\t\t\t\t\n",
        )?;
        let args = Args {
            path_input_tsv: path_in.to_string_lossy().to_string(),
            path_output_json: path_out.to_string_lossy().to_string(),
            evidence_types: vec![],
            max_record_count: Some(1),
        };

        run(&Default::default(), &args)?;

        let batch: QueryBatch = serde_json::from_str(&std::fs::read_to_string(&path_out)?)?;
        assert_eq!(batch.protein_change.len(), 1);
        assert_eq!(batch.protein_change[0].id, "673_V600E");

        // Without the limit, the malformed row is reported with its line.
        let args = Args {
            max_record_count: None,
            ..args
        };
        let err = run(&Default::default(), &args)
            .err()
            .expect("malformed row must fail");
        assert!(format!("{}", err).starts_with("problem parsing line 3 of "));

        Ok(())
    }

    #[test]
    fn invalid_row_names_line() -> Result<(), anyhow::Error> {
        let temp = TempDir::default();
        let path_in = temp.join("in.tsv");
        std::fs::write(
            &path_in,
            "# first comment\n\
             # second comment\n\
             kind\tentrez_gene_id\ttumor_type\talteration\tconsequence\tprotein_start\t\
             protein_end\tsite2_entrez_gene_id\tsv_type\n\
             copy_number\t2064\t\t\t\t\t\t\t\n",
        )?;
        let args = Args {
            path_input_tsv: path_in.to_string_lossy().to_string(),
            path_output_json: temp.join("out.json").to_string_lossy().to_string(),
            evidence_types: vec![],
            max_record_count: None,
        };

        let err = run(&Default::default(), &args)
            .err()
            .expect("copy number row without alteration must fail");
        assert!(format!("{}", err).starts_with("problem with line 4: "));

        Ok(())
    }

    #[test]
    fn smoke_test() -> Result<(), anyhow::Error> {
        let temp = TempDir::default();
        let path_out = temp.join("queries.json");

        let args_common = crate::common::Args {
            verbose: Verbosity::new(0, 1),
        };
        let args = Args {
            path_input_tsv: String::from("tests/data/queries/alterations.tsv"),
            path_output_json: path_out.to_string_lossy().to_string(),
            evidence_types: vec![],
            max_record_count: None,
        };

        run(&args_common, &args)?;

        let batch: QueryBatch =
            serde_json::from_str(&std::fs::read_to_string(&args.path_output_json)?)?;
        assert_eq!(
            batch
                .protein_change
                .iter()
                .map(|q| q.id.as_str())
                .collect::<Vec<_>>(),
            vec!["673_MEL_V600E_Missense_Mutation", "7157_R273H"]
        );
        assert_eq!(
            batch
                .copy_number_alterations
                .iter()
                .map(|q| q.copy_name_alteration_type.as_str())
                .collect::<Vec<_>>(),
            vec!["AMPLIFICATION"]
        );
        assert_eq!(
            batch
                .structural_variants
                .iter()
                .map(|q| (q.id.as_str(), q.functional_fusion))
                .collect::<Vec<_>>(),
            vec![
                ("673_MEL_BRAF-intragenic", false),
                ("238_NSCLC_EML4-ALK_fusion", true),
                ("27436_238_FUSION", true),
                ("1956_undefined_DELETION_GBM", false),
            ]
        );

        Ok(())
    }

    #[test]
    fn smoke_test_gz_with_limit() -> Result<(), anyhow::Error> {
        let temp = TempDir::default();
        let path_out = temp.join("queries.json.gz");

        let args = Args {
            path_input_tsv: String::from("tests/data/queries/alterations.tsv"),
            path_output_json: path_out.to_string_lossy().to_string(),
            evidence_types: vec![EvidenceType::Oncogenic],
            max_record_count: Some(2),
        };

        run(&Default::default(), &args)?;

        let reader = open_read_maybe_gz(&args.path_output_json)?;
        let batch: QueryBatch = serde_json::from_reader(reader)?;
        assert_eq!(batch.protein_change.len(), 2);
        assert_eq!(
            batch.protein_change[0].evidence_types,
            Some(vec![EvidenceType::Oncogenic])
        );
        assert!(batch.copy_number_alterations.is_empty());

        Ok(())
    }
}
