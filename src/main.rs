use std::process::ExitCode;

use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use linalg::{Matrix, Random, Vector};

type T = f64;

fn print_section(title: &str, body: impl std::fmt::Display) {
    println!("- {}\n{}", title, body);
}

fn rng_from_env() -> Result<Box<dyn RngCore>, String> {
    match std::env::var("LINALG_SEED") {
        Ok(seed) => {
            let seed: u64 = seed
                .parse()
                .map_err(|e| format!("invalid LINALG_SEED {:?}: {}", seed, e))?;
            log::info!("using seeded random source ({})", seed);
            Ok(Box::new(StdRng::seed_from_u64(seed)))
        }
        Err(_) => Ok(Box::new(rand::thread_rng())),
    }
}

fn dot_demo<const LR: usize, const LC: usize, const RC: usize>(rng: &mut dyn RngCore) {
    let a: Matrix<T, LR, LC> = Matrix::from_generator(&mut Random::with_rng(&mut *rng));
    let b: Matrix<T, LC, RC> = Matrix::from_generator(&mut Random::with_rng(&mut *rng));

    print_section("a", &a);
    print_section("b", &b);
    print_section("dot result", a.dot(&b));
}

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("LINALG_LOG", "warn,linalg=info"))
        .init();

    let mut rng = match rng_from_env() {
        Ok(rng) => rng,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Matrix operations
    let matrix: Matrix<T, 2, 5> = Matrix::from_generator(&mut Random::with_rng(&mut *rng));
    print_section("matrix", &matrix);

    let mut matrix2 = matrix + matrix;
    print_section("2matrix", &matrix2);
    print_section("(2matrix - matrix)", matrix2 - matrix);

    matrix2 -= matrix;
    print_section("(2matrix -= matrix)", &matrix2);

    // Scalar/Matrix operations
    print_section("1 + matrix", 1.0 + matrix);
    print_section("1 - matrix", 1.0 - matrix);
    print_section("1 * matrix", 1.0 * matrix);
    print_section("1 / matrix", 1.0 / matrix);

    // Vector/Matrix operations
    let input: Vector<T> = Vector::repeat(matrix.rows(), 2.0);
    match input.dot(&matrix) {
        Ok(v) => print_section("dot(m)", format!("> {}", v)),
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    // Vector operations
    let random_vector: Vector<T> = Vector::from_generator(2, &mut Random::with_rng(&mut *rng));
    print_section("random_vector", format!("> {}", random_vector));

    let mut vec: Vector<T> = Vector::from([2.0, 3.0]);
    print_section("vec", format!("> {}", vec));
    print_section("vec + vec", format!("> {}", &vec + &vec));
    print_section("vec - vec", format!("> {}", &vec - &vec));
    print_section("vec * vec", format!("> {}", &vec * &vec));
    print_section("vec / vec", format!("> {}", &vec / &vec));

    // Scalar/Vector operations
    print_section("1 + vec", format!("> {}", 1.0 + &vec));
    print_section("1 - vec", format!("> {}", 1.0 - &vec));
    print_section("1 * vec", format!("> {}", 1.0 * &vec));
    print_section("1 / vec", format!("> {}", 1.0 / &vec));

    let same = vec.clone();
    vec -= &same;
    print_section("vec -= vec", format!("> {}", vec));

    dot_demo::<2, 2, 2>(&mut *rng);
    dot_demo::<1, 3, 2>(&mut *rng);
    dot_demo::<3, 3, 3>(&mut *rng);

    ExitCode::SUCCESS
}
