//! Performance benchmarks for the Benefits Pricing Engine.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use benefits_pricing::calculation::{calculate_product_price, price_product, price_request};
use benefits_pricing::config::CatalogLoader;
use benefits_pricing::models::{
    CommuterBenefit, CoverageLevel, Employee, PricingRequest, Role, SelectedOptions,
};

fn load_catalog() -> CatalogLoader {
    CatalogLoader::load("./config/benefits").expect("Failed to load catalog")
}

fn bench_employee() -> Employee {
    Employee {
        id: "emp_bench_001".to_string(),
        name: "Bench".to_string(),
        salary: 89000.0,
        age: Some(42),
    }
}

fn family_options() -> SelectedOptions {
    SelectedOptions {
        family_members_to_cover: vec![Role::Employee, Role::Spouse, Role::Child],
        coverage_level: vec![
            CoverageLevel {
                role: Role::Employee,
                coverage: 200000.0,
            },
            CoverageLevel {
                role: Role::Spouse,
                coverage: 75000.0,
            },
            CoverageLevel {
                role: Role::Child,
                coverage: 20000.0,
            },
        ],
        benefit: Some(CommuterBenefit::Train),
    }
}

/// Benchmark: one product price per product type.
fn bench_single_product(c: &mut Criterion) {
    let loader = load_catalog();
    let employee = bench_employee();
    let options = family_options();

    let mut group = c.benchmark_group("calculate_product_price");
    for product in loader.catalog().products() {
        group.bench_with_input(BenchmarkId::from_parameter(&product.id), product, |b, product| {
            b.iter(|| calculate_product_price(black_box(product), &employee, &options))
        });
    }
    group.finish();
}

/// Benchmark: priced with an audit trace.
fn bench_price_product(c: &mut Criterion) {
    let loader = load_catalog();
    let product = loader.get_product("voluntary_life").unwrap();
    let employee = bench_employee();
    let options = family_options();

    c.bench_function("price_product_vol_life", |b| {
        b.iter(|| price_product(black_box(product), &employee, &options))
    });
}

/// Benchmark: pricing every catalog product for a batch of employees.
fn bench_batch(c: &mut Criterion) {
    let loader = load_catalog();
    let options = family_options();

    let mut group = c.benchmark_group("batch");
    for size in [100usize, 1000] {
        let employees: Vec<Employee> = (0..size)
            .map(|i| Employee {
                id: format!("emp_{:05}", i),
                name: String::new(),
                salary: 40000.0 + (i as f64) * 100.0,
                age: Some(25 + (i % 40) as u32),
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| {
                for employee in employees {
                    for product in loader.catalog().products() {
                        black_box(calculate_product_price(product, employee, &options).ok());
                    }
                }
            })
        });
    }
    group.finish();
}

/// Benchmark: resolving a raw JSON request.
fn bench_request(c: &mut Criterion) {
    let request: PricingRequest = serde_json::from_value(serde_json::json!({
        "product": {
            "id": "long_term_disability",
            "type": "ltd",
            "costs": {
                "coverage_percentage": 60,
                "rate": { "basis": "flat", "price": 0.6, "cost_divisor": 1000 }
            },
            "employer_contribution": { "mode": "dollars", "amount": 10 }
        },
        "employee": { "id": "emp_bench_001", "salary": 89000 },
        "selected_options": { "family_members_to_cover": ["ee"] }
    }))
    .expect("Failed to create request");

    c.bench_function("price_request_ltd", |b| {
        b.iter(|| price_request(black_box(&request)))
    });
}

criterion_group!(
    benches,
    bench_single_product,
    bench_price_product,
    bench_batch,
    bench_request
);
criterion_main!(benches);
