// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成供应商导入测试数据集CSV文件
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use csv::{Writer, WriterBuilder};
use std::error::Error;
use std::fs::File;

// CSV 表头（25 列，定序）
const CSV_HEADER: &[&str] = &[
    "name",
    "description",
    "first_name",
    "last_name",
    "company_name",
    "phone",
    "mobile",
    "fax",
    "email",
    "twitter",
    "website",
    "physical_address1",
    "physical_address2",
    "physical_suburb",
    "physical_city",
    "physical_postcode",
    "physical_state",
    "physical_country_id",
    "postal_address1",
    "postal_address2",
    "postal_suburb",
    "postal_city",
    "postal_postcode",
    "postal_state",
    "postal_country_id",
];

// 供应商记录结构
#[derive(Clone)]
struct SupplierRow {
    name: String,
    description: String,
    first_name: String,
    last_name: String,
    company_name: String,
    phone: String,
    mobile: String,
    fax: String,
    email: String,
    twitter: String,
    website: String,
    physical_address1: String,
    physical_address2: String,
    physical_suburb: String,
    physical_city: String,
    physical_postcode: String,
    physical_state: String,
    physical_country_id: String,
    postal_address1: String,
    postal_address2: String,
    postal_suburb: String,
    postal_city: String,
    postal_postcode: String,
    postal_state: String,
    postal_country_id: String,
}

impl SupplierRow {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.company_name.clone(),
            self.phone.clone(),
            self.mobile.clone(),
            self.fax.clone(),
            self.email.clone(),
            self.twitter.clone(),
            self.website.clone(),
            self.physical_address1.clone(),
            self.physical_address2.clone(),
            self.physical_suburb.clone(),
            self.physical_city.clone(),
            self.physical_postcode.clone(),
            self.physical_state.clone(),
            self.physical_country_id.clone(),
            self.postal_address1.clone(),
            self.postal_address2.clone(),
            self.postal_suburb.clone(),
            self.postal_city.clone(),
            self.postal_postcode.clone(),
            self.postal_state.clone(),
            self.postal_country_id.clone(),
        ]
    }
}

// 生成正常供应商记录
fn generate_normal_record(index: usize) -> SupplierRow {
    let cities = ["Auckland", "Wellington", "Christchurch", "Hamilton"];
    let city = cities[index % 4].to_string();
    let mirror_postal = index % 2 == 0;

    let physical_address1 = format!("{} Queen St", (index % 90) + 1);
    let physical_postcode = format!("{:04}", 1000 + index % 100);

    SupplierRow {
        name: format!("Supplier {:04}", index + 1),
        description: format!("Wholesale account {:04}", index + 1),
        first_name: ["Jane", "Mere", "Aroha", "Sefa"][index % 4].to_string(),
        last_name: ["Doe", "Kingi", "Ngata", "Tuilagi"][index % 4].to_string(),
        company_name: format!("Supplier {:04} Ltd", index + 1),
        phone: format!("09 555 {:04}", index % 10000),
        mobile: if index % 3 == 0 {
            String::new()
        } else {
            format!("021 555 {:04}", index % 10000)
        },
        fax: String::new(),
        email: format!("orders{}@supplier.example", index + 1),
        twitter: String::new(),
        website: if index % 2 == 0 {
            format!("https://supplier{}.example", index + 1)
        } else {
            String::new()
        },
        physical_address1: physical_address1.clone(),
        physical_address2: String::new(),
        physical_suburb: "Central".to_string(),
        physical_city: city.clone(),
        physical_postcode: physical_postcode.clone(),
        physical_state: city.clone(),
        physical_country_id: "NZ".to_string(),
        postal_address1: if mirror_postal {
            physical_address1
        } else {
            String::new()
        },
        postal_address2: String::new(),
        postal_suburb: if mirror_postal {
            "Central".to_string()
        } else {
            String::new()
        },
        postal_city: if mirror_postal { city.clone() } else { String::new() },
        postal_postcode: if mirror_postal {
            physical_postcode
        } else {
            String::new()
        },
        postal_state: if mirror_postal { city } else { String::new() },
        postal_country_id: if mirror_postal {
            "NZ".to_string()
        } else {
            String::new()
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");

    std::fs::create_dir_all("tests/fixtures/datasets")?;

    // 1. 生成正常数据 (100条)
    generate_normal_data()?;

    // 2. 生成表头错误数据
    generate_bad_header()?;

    // 3. 生成行宽不足数据
    generate_short_rows()?;

    // 4. 生成稀疏字段数据
    generate_sparse_fields()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_normal_data() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/01_normal_100.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    for i in 0..100 {
        let record = generate_normal_record(i);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 01_normal_100.csv (100条)");
    Ok(())
}

fn generate_bad_header() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/02_bad_header.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // 第 7 列写成 cell,加载时应在该列报表头不符
    let bad_header: Vec<&str> = CSV_HEADER
        .iter()
        .map(|&col| if col == "mobile" { "cell" } else { col })
        .collect();
    wtr.write_record(&bad_header)?;

    for i in 0..3 {
        let record = generate_normal_record(i + 200);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 02_bad_header.csv (3条，表头第7列错误)");
    Ok(())
}

fn generate_short_rows() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/03_short_rows.csv";
    let file = File::create(path)?;
    // 行宽不一致,需要 flexible 写出
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 前2条正常
    for i in 0..2 {
        let record = generate_normal_record(i + 300);
        wtr.write_record(&record.to_row())?;
    }

    // 第3条只有2列,加载时应在第3行报行宽不足
    wtr.write_record(["Only Name", "and description"])?;

    wtr.flush()?;
    println!("✓ 生成 03_short_rows.csv (3条，第3行宽度不足)");
    Ok(())
}

fn generate_sparse_fields() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/04_sparse_fields.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 只填名称,其余字段留空,提交时应整体省略
    for i in 0..10 {
        let mut row = vec![String::new(); CSV_HEADER.len()];
        row[0] = format!("Sparse Supplier {:02}", i + 1);
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    println!("✓ 生成 04_sparse_fields.csv (10条，稀疏字段)");
    Ok(())
}
