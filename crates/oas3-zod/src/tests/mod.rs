use std::path::Path;

use crate::{
  generator::{CodegenConfig, SchemaScope, orchestrator::Orchestrator, spec::OpenApiDocument},
  naming::{IdentifierCase, NamingConvention},
  utils::spec::{SpecFormat, SpecLoader, parse_document},
};

const PETSTORE_YAML: &str = include_str!("../../fixtures/petstore.yaml");
const PETSTORE_TS: &str = include_str!("../../fixtures/petstore.ts");
const TREE_JSON: &str = include_str!("../../fixtures/tree.json");

fn petstore() -> OpenApiDocument {
  parse_document(PETSTORE_YAML.as_bytes(), SpecFormat::Yaml).expect("petstore fixture should parse")
}

fn tree() -> OpenApiDocument {
  parse_document(TREE_JSON.as_bytes(), SpecFormat::Json).expect("tree fixture should parse")
}

#[test]
fn test_petstore_output() {
  let orchestrator = Orchestrator::new(petstore(), CodegenConfig::default(), None, None);
  let (code, stats) = orchestrator.generate();
  assert_eq!(code, PETSTORE_TS);

  assert_eq!(stats.definitions_generated, 3);
  assert_eq!(stats.lazy_definitions_generated, 0);
  assert_eq!(stats.operations_converted, 3);
  assert_eq!(stats.parameters_compiled, 2);
  assert_eq!(stats.responses_compiled, 4);
  assert!(stats.warnings.is_empty());
}

#[test]
fn test_petstore_header() {
  let orchestrator = Orchestrator::new(petstore(), CodegenConfig::default(), None, None);
  let (code, _) = orchestrator.generate_with_header("fixtures/petstore.yaml");
  let expected_header = concat!(
    "// AUTO-GENERATED CODE - DO NOT EDIT!\n",
    "//\n",
    "// Swagger Petstore\n",
    "// Source: fixtures/petstore.yaml\n",
    "// Version: 1.0.0\n",
    "// Generated by `oas3-zod`\n",
    "//\n",
    "// A sample API that uses a petstore as an example.\n",
    "\n",
  );
  assert_eq!(code, format!("{expected_header}{PETSTORE_TS}"));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
  let config = CodegenConfig::builder()
    .naming(NamingConvention::new(IdentifierCase::Camel, "Validator"))
    .with_descriptions(true)
    .build();

  let runs = (0..5)
    .map(|_| Orchestrator::new(tree(), config.clone(), None, None).generate().0)
    .collect::<Vec<_>>();
  assert!(runs.iter().all(|run| run == &runs[0]));
  assert!(runs[0].contains("export const employeeValidator: z.ZodType = z.lazy(() => z.object({"));
}

#[test]
fn test_mutually_recursive_definitions_are_lazy() {
  let orchestrator = Orchestrator::new(tree(), CodegenConfig::default(), None, None);
  let output = orchestrator.compile();
  let order = output
    .definitions
    .iter()
    .map(|definition| (definition.name.as_str(), definition.compiled.self_referential))
    .collect::<Vec<_>>();
  assert_eq!(order, [("Employee", true), ("Department", true), ("Address", false)]);
  assert_eq!(output.stats.cycle_details, [vec!["Employee".to_string(), "Department".to_string()]]);

  let (code, _) = orchestrator.generate();
  let employee = concat!(
    "export const EmployeeSchema: z.ZodType = z.lazy(() => z.object({\n",
    "  email: z.email(),\n",
    "  department: DepartmentSchema.optional(),\n",
    "  title: z.string().nullable().optional(),\n",
    "}));\n",
  );
  let department = concat!(
    "export const DepartmentSchema: z.ZodType = z.lazy(() => z.object({\n",
    "  name: z.string(),\n",
    "  head: EmployeeSchema.nullable().optional(),\n",
    "  parent: DepartmentSchema.optional(),\n",
    "}));\n",
  );
  assert!(code.contains(employee), "missing Employee in:\n{code}");
  assert!(code.contains(department), "missing Department in:\n{code}");
  assert!(code.contains("export const AddressSchema = z.record(z.string(), z.string());\n"));
  assert!(code.contains("alias: \"getDepartment\","));
  assert!(code.contains("id: z.preprocess("));
  assert!(code.contains("z.boolean()).optional(),"));
}

#[test]
fn test_referenced_only_drops_unreachable_definitions() {
  let config = CodegenConfig::builder().schema_scope(SchemaScope::ReferencedOnly).build();
  let (code, stats) = Orchestrator::new(tree(), config, None, None).generate();
  assert!(!code.contains("AddressSchema"));
  assert_eq!(stats.definitions_generated, 2);
  assert_eq!(stats.orphaned_schemas_count, 1);
}

#[tokio::test]
async fn test_loads_fixture_from_disk() {
  let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/tree.json");
  let loader = SpecLoader::open(&path).await.expect("fixture should open");
  let document = loader.parse().expect("fixture should parse");
  assert_eq!(document.info.title, "Org Chart");
  assert_eq!(document.components.schemas.len(), 3);
}
