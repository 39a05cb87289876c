//! Integration tests for the dense matrix type

use densor::dim::Dim2;
use densor::dtype::DType;
use densor::executor::HostExecutor;
use densor::matrix::Dense;
use densor::Error;

#[test]
fn test_stored_elements_packed() {
    let exec = HostExecutor::new();
    let mat = Dense::<HostExecutor>::try_new(Dim2::new(3, 4), DType::F32, &exec).unwrap();

    assert_eq!(mat.num_stored_elements(), 12);
    assert_eq!(mat.size(), Dim2::new(3, 4));
    assert_eq!(mat.stride(), 4);
    assert_eq!(mat.dtype(), DType::F32);
}

#[test]
fn test_stored_elements_padded_stride() {
    let exec = HostExecutor::new();
    let mat =
        Dense::<HostExecutor>::try_with_stride(Dim2::new(3, 4), 5, DType::F32, &exec).unwrap();

    // 3 rows of stride 5 are physically allocated
    assert_eq!(mat.num_stored_elements(), 15);
    // but only 12 logical elements come back
    assert_eq!(mat.to_vec::<f32>().unwrap().len(), 12);
}

#[test]
fn test_new_is_zero_initialized() {
    let exec = HostExecutor::new();
    let mat = Dense::<HostExecutor>::try_new(Dim2::new(2, 3), DType::F64, &exec).unwrap();
    assert_eq!(mat.to_vec::<f64>().unwrap(), vec![0.0; 6]);
}

#[test]
fn test_from_slice_and_get() {
    let exec = HostExecutor::new();
    let mat = Dense::try_from_slice(
        &[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0],
        Dim2::new(2, 3),
        &exec,
    )
    .unwrap();

    assert_eq!(mat.get::<f32>(0, 0).unwrap(), 1.0);
    assert_eq!(mat.get::<f32>(0, 2).unwrap(), 3.0);
    assert_eq!(mat.get::<f32>(1, 0).unwrap(), 4.0);
    assert_eq!(mat.get::<f32>(1, 2).unwrap(), 6.0);
}

#[test]
fn test_set_then_get() {
    let exec = HostExecutor::new();
    let mut mat = Dense::<HostExecutor>::try_new(Dim2::new(3, 3), DType::F32, &exec).unwrap();

    mat.set(1, 2, 42.5f32).unwrap();
    assert_eq!(mat.get::<f32>(1, 2).unwrap(), 42.5);
    assert_eq!(mat.get::<f32>(2, 1).unwrap(), 0.0);
}

#[test]
fn test_set_respects_stride() {
    let exec = HostExecutor::new();
    let mut mat =
        Dense::<HostExecutor>::try_with_stride(Dim2::new(2, 2), 3, DType::F32, &exec).unwrap();

    mat.set(0, 1, 1.0f32).unwrap();
    mat.set(1, 0, 2.0f32).unwrap();

    assert_eq!(mat.to_vec::<f32>().unwrap(), vec![0.0, 1.0, 2.0, 0.0]);
}

#[test]
fn test_fill() {
    let exec = HostExecutor::new();
    let mut mat = Dense::<HostExecutor>::try_new(Dim2::new(4, 3), DType::F32, &exec).unwrap();

    mat.fill(2.5f32).unwrap();
    assert_eq!(mat.to_vec::<f32>().unwrap(), vec![2.5; 12]);
}

#[test]
fn test_fill_large_matrix() {
    // Large enough to take the parallel path when rayon is enabled
    let exec = HostExecutor::new();
    let mut mat = Dense::<HostExecutor>::try_new(Dim2::new(1024, 16), DType::F64, &exec).unwrap();

    mat.fill(1.0f64).unwrap();
    let values = mat.to_vec::<f64>().unwrap();
    assert_eq!(values.len(), 1024 * 16);
    assert!(values.iter().all(|&v| v == 1.0));
}

#[test]
fn test_full_scalar_and_ones() {
    let exec = HostExecutor::new();

    let full = Dense::<HostExecutor>::try_full_scalar(Dim2::new(2, 3), DType::F32, 2.5, &exec)
        .unwrap();
    assert_eq!(full.to_vec::<f32>().unwrap(), vec![2.5; 6]);

    let ones = Dense::<HostExecutor>::try_ones(Dim2::new(2, 2), DType::F64, &exec).unwrap();
    assert_eq!(ones.to_vec::<f64>().unwrap(), vec![1.0; 4]);
}

#[test]
fn test_at_reads_any_dtype() {
    let exec = HostExecutor::new();

    let f32_mat = Dense::try_from_slice(&[1.5f32, 2.5], Dim2::new(1, 2), &exec).unwrap();
    assert_eq!(f32_mat.at(0, 1).unwrap(), 2.5);

    let f64_mat = Dense::try_from_slice(&[3.5f64, 4.5], Dim2::new(2, 1), &exec).unwrap();
    assert_eq!(f64_mat.at(1, 0).unwrap(), 4.5);

    assert!(matches!(
        f32_mat.at(1, 0),
        Err(Error::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_transpose() {
    let exec = HostExecutor::new();
    let mat = Dense::try_from_slice(
        &[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0],
        Dim2::new(2, 3),
        &exec,
    )
    .unwrap();

    let t = mat.transpose().unwrap();
    assert_eq!(t.size(), Dim2::new(3, 2));
    assert_eq!(
        t.to_vec::<f32>().unwrap(),
        vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]
    );
}

#[test]
fn test_transpose_padded_stride() {
    let exec = HostExecutor::new();
    let mut mat =
        Dense::<HostExecutor>::try_with_stride(Dim2::new(2, 2), 4, DType::F64, &exec).unwrap();
    mat.set(0, 1, 7.0f64).unwrap();

    let t = mat.transpose().unwrap();
    assert_eq!(t.stride(), t.cols()); // result is packed
    assert_eq!(t.get::<f64>(1, 0).unwrap(), 7.0);
}

#[test]
fn test_overflowing_dimensions_rejected() {
    let exec = HostExecutor::new();

    let result =
        Dense::<HostExecutor>::try_with_stride(Dim2::new(usize::MAX, 2), usize::MAX, DType::F32, &exec);
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));

    // element count fits, byte size does not
    let result =
        Dense::<HostExecutor>::try_with_stride(Dim2::new(1, 1), usize::MAX / 2, DType::F64, &exec);
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_clone_shares_storage() {
    let exec = HostExecutor::new();
    let mut mat = Dense::<HostExecutor>::try_new(Dim2::new(2, 2), DType::F32, &exec).unwrap();
    let clone = mat.clone();

    mat.set(0, 0, 9.0f32).unwrap();
    assert_eq!(clone.get::<f32>(0, 0).unwrap(), 9.0);
}

#[test]
fn test_zero_sized_matrix() {
    let exec = HostExecutor::new();

    let empty_rows = Dense::<HostExecutor>::try_new(Dim2::new(0, 4), DType::F32, &exec).unwrap();
    assert_eq!(empty_rows.num_stored_elements(), 0);
    assert_eq!(empty_rows.to_vec::<f32>().unwrap(), Vec::<f32>::new());

    let empty_cols = Dense::<HostExecutor>::try_new(Dim2::new(3, 0), DType::F32, &exec).unwrap();
    assert_eq!(empty_cols.num_stored_elements(), 0);
}

#[test]
fn test_from_slice_shape_mismatch() {
    let exec = HostExecutor::new();
    let result = Dense::try_from_slice(&[1.0f32, 2.0, 3.0], Dim2::new(2, 2), &exec);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_stride_too_small() {
    let exec = HostExecutor::new();
    let result = Dense::<HostExecutor>::try_with_stride(Dim2::new(2, 4), 3, DType::F32, &exec);
    assert!(matches!(result, Err(Error::StrideTooSmall { .. })));
}

#[test]
fn test_get_out_of_bounds() {
    let exec = HostExecutor::new();
    let mat = Dense::<HostExecutor>::try_new(Dim2::new(2, 2), DType::F32, &exec).unwrap();

    assert!(matches!(
        mat.get::<f32>(2, 0),
        Err(Error::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        mat.get::<f32>(0, 2),
        Err(Error::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_dtype_mismatch_on_access() {
    let exec = HostExecutor::new();
    let mut mat = Dense::<HostExecutor>::try_new(Dim2::new(2, 2), DType::F32, &exec).unwrap();

    assert!(matches!(
        mat.get::<f64>(0, 0),
        Err(Error::DTypeMismatch { .. })
    ));
    assert!(matches!(
        mat.set(0, 0, 1.0f64),
        Err(Error::DTypeMismatch { .. })
    ));
    assert!(matches!(
        mat.fill(1.0f64),
        Err(Error::DTypeMismatch { .. })
    ));
}

#[test]
fn test_debug_format() {
    let exec = HostExecutor::new();
    let mat = Dense::<HostExecutor>::try_new(Dim2::new(3, 4), DType::F32, &exec).unwrap();
    let dbg = format!("{mat:?}");

    assert!(dbg.contains("3x4"));
    assert!(dbg.contains("host"));
}
